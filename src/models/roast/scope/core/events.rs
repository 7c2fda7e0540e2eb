//! Roast event markers and the reference band.

use std::fmt;

use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

/// Times of the three marked roast events.
///
/// Events are taken as given. Nothing requires them to be in chronological
/// order or inside the recorded time range; see [`RoastEvents::is_chronological`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoastEvents {
    pub charge_at: Time,
    pub turning_point_at: Time,
    pub drop_at: Time,
}

impl Default for RoastEvents {
    fn default() -> Self {
        Self::from_minutes(0.2, 0.65, 7.1)
    }
}

impl RoastEvents {
    /// Constructs events from times in minutes.
    #[must_use]
    pub fn from_minutes(charge: f64, turning_point: f64, drop: f64) -> Self {
        Self {
            charge_at: Time::new::<minute>(charge),
            turning_point_at: Time::new::<minute>(turning_point),
            drop_at: Time::new::<minute>(drop),
        }
    }

    /// Returns `true` if charge, turning point, and drop are strictly increasing.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.charge_at < self.turning_point_at && self.turning_point_at < self.drop_at
    }

    /// Returns the chart markers, in charge, turning point, drop order.
    #[must_use]
    pub fn markers(&self) -> [EventMarker; 3] {
        [
            EventMarker::new(EventKind::Charge, self.charge_at),
            EventMarker::new(EventKind::TurningPoint, self.turning_point_at),
            EventMarker::new(EventKind::Drop, self.drop_at),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Beans enter the roaster.
    Charge,
    /// Lowest bean temperature after charge.
    TurningPoint,
    /// Beans leave the roaster.
    Drop,
}

/// A vertical reference line on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventMarker {
    pub kind: EventKind,
    pub at: Time,
}

impl EventMarker {
    #[must_use]
    pub fn new(kind: EventKind, at: Time) -> Self {
        Self { kind, at }
    }

    /// Marker position in minutes.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.at.get::<minute>()
    }
}

/// Displays the marker label, e.g. `CHARGE`, `TP 0.65`, or `DROP 7.10`.
impl fmt::Display for EventMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::Charge => f.write_str("CHARGE"),
            EventKind::TurningPoint => write!(f, "TP {:.2}", self.minutes()),
            EventKind::Drop => write!(f, "DROP {:.2}", self.minutes()),
        }
    }
}

/// A shaded horizontal band on the temperature axis.
///
/// Defaults to 220–240 °C, the usual drop window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBand {
    pub lower: ThermodynamicTemperature,
    pub upper: ThermodynamicTemperature,
}

impl Default for ReferenceBand {
    fn default() -> Self {
        Self::from_celsius(220.0, 240.0)
    }
}

impl ReferenceBand {
    #[must_use]
    pub fn from_celsius(lower: f64, upper: f64) -> Self {
        Self {
            lower: ThermodynamicTemperature::new::<degree_celsius>(lower),
            upper: ThermodynamicTemperature::new::<degree_celsius>(upper),
        }
    }

    /// Returns `true` if `temperature` lies within the band, bounds included.
    #[must_use]
    pub fn contains(&self, temperature: ThermodynamicTemperature) -> bool {
        self.lower <= temperature && temperature <= self.upper
    }
}
