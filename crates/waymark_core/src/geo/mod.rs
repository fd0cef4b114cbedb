//! Pure spatial comparison math.
//!
//! # Responsibility
//! - Great-circle distance between two lat/lon points.
//! - Circular difference between two compass headings.
//!
//! # Invariants
//! - Both functions are stateless and never error; NaN inputs propagate NaN.
//! - `heading_difference_deg` output is always within [0, 180].

mod math;

pub use math::{distance_meters, heading_difference_deg, EARTH_RADIUS_M};
