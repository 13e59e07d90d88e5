//! Stop type.

use crate::distance::haversine;

/// A named geographic stop.
///
/// A stop remembers the 0-based position it held in the original input
/// (`original_index`). That index is immutable and serves as the stable key
/// into the [`DistanceMatrix`](crate::distance::DistanceMatrix); it is
/// independent of the stop's current position in a [`Tour`](super::Tour).
///
/// # Examples
///
/// ```
/// use tsp_heuristics::models::Stop;
///
/// let a = Stop::new("ATL", 33.64, -84.42, 0);
/// assert_eq!(a.name(), "ATL");
/// assert_eq!(a.original_index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    lat: f64,
    lon: f64,
    original_index: usize,
}

impl Stop {
    /// Creates a new stop. Coordinates are degrees.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, original_index: usize) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            original_index,
        }
    }

    /// Identifier printed in reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Position of this stop in the original input order.
    pub fn original_index(&self) -> usize {
        self.original_index
    }

    /// Great-circle distance to another stop, in meters.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        haversine(self.lat, self.lon, other.lat, other.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new("BOS", 42.36, -71.01, 3);
        assert_eq!(s.name(), "BOS");
        assert_eq!(s.lat(), 42.36);
        assert_eq!(s.lon(), -71.01);
        assert_eq!(s.original_index(), 3);
    }

    #[test]
    fn test_distance_zero_at_identity() {
        let s = Stop::new("A", 10.0, 20.0, 0);
        assert_eq!(s.distance_to(&s), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Stop::new("A", 12.5, -3.25, 0);
        let b = Stop::new("B", -7.0, 81.0, 1);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-6);
    }
}
