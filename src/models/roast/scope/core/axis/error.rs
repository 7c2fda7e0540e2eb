use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while configuring a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AxisConfigError {
    /// An axis bound violated its numeric constraint.
    #[error("invalid axis bound")]
    Bound(#[source] ConstraintError),

    /// The tick step was not strictly positive.
    #[error("invalid tick step")]
    Step(#[source] ConstraintError),

    /// The maximum was below the minimum.
    #[error("axis maximum {max} is below minimum {min}")]
    Inverted {
        /// Requested minimum.
        min: f64,

        /// Requested maximum.
        max: f64,
    },
}
