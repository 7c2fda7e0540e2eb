//! # Roast Scope
//!
//! Models and model-building tools for coffee roast telemetry charts.
//!
//! A roast is recorded as an ordered series of samples holding bean
//! temperature (BT) and environment temperature (ET). This crate derives the
//! rate of rise (RoR) from those samples, computes the axes and event markers
//! a dual-axis chart needs, and generates a deterministic demo profile when no
//! live feed is available. Drawing the chart is left to the caller.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use roast_scope::models::roast::scope::{RoastScopeModel, ScopeInput};
//! use twine_core::Model;
//!
//! let model = RoastScopeModel::default();
//! let view = model.call(&ScopeInput::demo()).unwrap();
//!
//! assert_eq!(view.samples.len(), 101);
//! assert_eq!(view.time_axis.max, 16.0);
//! ```

pub mod models;
pub mod support;
