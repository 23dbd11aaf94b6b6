//! Great-circle distance between donor and center positions.
//!
//! Uses the haversine formula on a spherical-earth approximation. The
//! function is pure; annotation and tie-breaking policy live in the engine.

use geo::Coord;

/// Mean earth radius in kilometres for the spherical approximation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two WGS84 positions.
///
/// Coordinates follow the workspace convention of `x = longitude` and
/// `y = latitude`, both in degrees. The result is symmetric and zero for
/// identical inputs.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use givewear_core::distance_km;
///
/// let london = Coord { x: -0.1278, y: 51.5074 };
/// let paris = Coord { x: 2.3522, y: 48.8566 };
/// let km = distance_km(london, paris);
/// assert!((km - 343.5).abs() < 2.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is floating-point trigonometry"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let (lat1, lat2) = (a.y.to_radians(), b.y.to_radians());
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lon = (b.x - a.x).to_radians();
    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
