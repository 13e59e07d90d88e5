//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance between two coordinates, in meters.
///
/// Inputs are latitude/longitude in degrees. The metric is symmetric and
/// zero for identical coordinates; non-finite coordinates propagate as NaN
/// (validation belongs upstream).
///
/// # Examples
///
/// ```
/// use tsp_heuristics::distance::haversine;
///
/// // one degree of longitude along the equator
/// let d = haversine(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111_194.93).abs() < 1.0);
/// assert_eq!(haversine(10.0, 20.0, 10.0, 20.0), 0.0);
/// ```
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let s1 = (dphi / 2.0).sin();
    let s2 = (dlambda / 2.0).sin();
    let h = s1 * s1 + phi1.cos() * phi2.cos() * s2 * s2;
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
