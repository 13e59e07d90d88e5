//! Tour type.

use super::Stop;

/// An ordered, cyclic sequence of stops: the last stop connects back to the
/// first.
///
/// Every tour produced by this crate is a permutation of the full stop set —
/// no duplicates, no omissions. Positions in the sequence are independent of
/// each stop's `original_index`, which travels with the stop through swaps.
///
/// # Examples
///
/// ```
/// use tsp_heuristics::models::{Stop, Tour};
///
/// let mut tour = Tour::new(vec![
///     Stop::new("A", 0.0, 0.0, 0),
///     Stop::new("B", 0.0, 1.0, 1),
/// ]);
/// assert_eq!(tour.len(), 2);
/// tour.swap(0, 1);
/// assert_eq!(tour.stops()[0].name(), "B");
/// assert_eq!(tour.stops()[0].original_index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    stops: Vec<Stop>,
}

impl Tour {
    /// Creates a tour visiting the given stops in order.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Total cycle length: the sum of consecutive-pair distances plus the
    /// wraparound edge, computed from raw coordinates. O(n) on every call;
    /// the local searches keep incremental totals instead of calling this in
    /// a loop.
    pub fn total_length(&self) -> f64 {
        let n = self.stops.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.stops[i].distance_to(&self.stops[(i + 1) % n]))
            .sum()
    }

    /// Exchanges the stops at positions `i` and `j` in place.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.stops.swap(i, j);
    }

    /// Canonical reorientation of the cycle, as a pure post-processing step.
    ///
    /// The result starts at the stop with `original_index` 0 and proceeds
    /// toward the neighbor with the larger `original_index`. When both
    /// neighbors are the same stop (n <= 2) the forward direction is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_heuristics::models::{Stop, Tour};
    ///
    /// let tour = Tour::new(vec![
    ///     Stop::new("A", 0.0, 0.0, 0),
    ///     Stop::new("B", 0.0, 1.0, 1),
    ///     Stop::new("C", 1.0, 1.0, 2),
    ///     Stop::new("D", 1.0, 0.0, 3),
    /// ]);
    /// let canon = tour.canonicalized();
    /// let names: Vec<_> = canon.stops().iter().map(|s| s.name()).collect();
    /// assert_eq!(names, ["A", "D", "C", "B"]);
    /// ```
    pub fn canonicalized(&self) -> Tour {
        let n = self.stops.len();
        if n == 0 {
            return self.clone();
        }
        let start = self
            .stops
            .iter()
            .position(|s| s.original_index() == 0)
            .unwrap_or(0);
        let prev = &self.stops[(start + n - 1) % n];
        let next = &self.stops[(start + 1) % n];

        let mut stops = Vec::with_capacity(n);
        if next.original_index() >= prev.original_index() {
            for i in 0..n {
                stops.push(self.stops[(start + i) % n].clone());
            }
        } else {
            for i in 0..n {
                stops.push(self.stops[(start + n - i) % n].clone());
            }
        }
        Tour::new(stops)
    }
}
