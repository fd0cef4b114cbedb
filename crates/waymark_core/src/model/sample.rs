//! Sensor sample shapes.
//!
//! # Responsibility
//! - Model position and heading inputs exactly as the engine consumes them.
//!
//! # Invariants
//! - A `PositionSample` always carries both coordinates; callers express
//!   "no fix yet" as `Option<PositionSample>::None`, never as (0, 0).
//! - `HeadingSample { degrees: None }` means unknown and is distinct from 0°.

/// One position fix from the location sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl PositionSample {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One heading reading from the orientation sensor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingSample {
    /// Compass heading in degrees [0, 360), `None` when the sensor has not
    /// reported yet or reported a non-numeric value.
    pub degrees: Option<f64>,
}

impl HeadingSample {
    /// An unknown heading; never matches any stored heading.
    pub const UNKNOWN: Self = Self { degrees: None };

    pub fn known(degrees: f64) -> Self {
        Self {
            degrees: Some(degrees),
        }
    }

    /// Integer-degree projection for labels. Qualification math uses the raw
    /// value, this is presentation only.
    pub fn rounded_degrees(&self) -> Option<i64> {
        self.degrees.map(|deg| deg.round() as i64)
    }
}
