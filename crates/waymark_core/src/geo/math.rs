//! Haversine distance and circular heading difference.

/// Mean Earth radius in meters used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two lat/lon points.
///
/// Symmetric and non-negative; zero (up to floating precision) iff the
/// points coincide. Inputs are assumed to be valid degrees; non-finite
/// inputs propagate through as NaN rather than erroring.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Absolute circular difference between two headings, in degrees [0, 180].
///
/// Handles wraparound: the difference between 350° and 10° is 20°, not 340°.
/// Defined only for two known headings; callers with an unknown heading on
/// either side must treat the comparison as non-matching instead of calling
/// this with a placeholder.
pub fn heading_difference_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}
