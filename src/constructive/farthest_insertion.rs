//! Farthest-insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Starting from the stop at input position 0, repeatedly select the
//! unvisited stop farthest from the most recently selected one. Placement
//! alternates between the ends of the output: even-numbered selections
//! (0-based) extend a front-growing prefix, odd-numbered selections fill the
//! output from the back, working backward from the final slot. The result
//! interleaves a forward-growing prefix with a backward-growing suffix.
//!
//! # Complexity
//!
//! O(n²): each of the n selections scans all remaining stops.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Builds a tour by greedy farthest-first selection.
///
/// Ties in the farthest scan break toward the first-encountered maximum
/// (lowest input position), so construction is deterministic. The input tour
/// is not modified.
///
/// # Arguments
///
/// * `tour` — Initial tour in input order
/// * `distances` — Pairwise distance matrix over the same stops
///
/// # Examples
///
/// ```
/// use tsp_heuristics::constructive::farthest_insertion;
/// use tsp_heuristics::distance::DistanceMatrix;
/// use tsp_heuristics::models::{Stop, Tour};
///
/// // collinear stops: from A the farthest is C, then B remains
/// let tour = Tour::new(vec![
///     Stop::new("A", 0.0, 0.0, 0),
///     Stop::new("B", 0.0, 1.0, 1),
///     Stop::new("C", 0.0, 2.0, 2),
/// ]);
/// let distances = DistanceMatrix::from_stops(tour.stops());
/// let built = farthest_insertion(&tour, &distances);
/// let names: Vec<_> = built.stops().iter().map(|s| s.name()).collect();
/// assert_eq!(names, ["A", "B", "C"]);
/// ```
pub fn farthest_insertion(tour: &Tour, distances: &DistanceMatrix) -> Tour {
    let stops = tour.stops();
    let n = stops.len();
    if n < 2 {
        return tour.clone();
    }

    let mut visited = vec![false; n];
    let mut selections = Vec::with_capacity(n);
    let mut current = 0usize;

    for _ in 0..n {
        visited[current] = true;
        selections.push(current);

        let mut farthest: Option<(usize, f64)> = None;
        for (candidate, stop) in stops.iter().enumerate() {
            if visited[candidate] {
                continue;
            }
            let d = distances.between(&stops[current], stop);
            match farthest {
                Some((_, best)) if d <= best => {}
                _ => farthest = Some((candidate, d)),
            }
        }
        if let Some((next, _)) = farthest {
            current = next;
        }
    }

    // even-numbered selections grow the prefix, odd ones fill from the back
    let mut placed = vec![0usize; n];
    let mut front = 0usize;
    for (step, &position) in selections.iter().enumerate() {
        if step % 2 == 0 {
            placed[front] = position;
            front += 1;
        } else {
            placed[n - front] = position;
        }
    }

    Tour::new(placed.into_iter().map(|p| stops[p].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stop;

    fn equator_line(count: usize) -> Tour {
        let stops = (0..count)
            .map(|i| Stop::new(format!("s{i}"), 0.0, i as f64, i))
            .collect();
        Tour::new(stops)
    }

    fn unit() -> f64 {
        Stop::new("x", 0.0, 0.0, 0).distance_to(&Stop::new("y", 0.0, 1.0, 1))
    }

    #[test]
    fn test_collinear_three_stops() {
        let tour = equator_line(3);
        let distances = DistanceMatrix::from_stops(tour.stops());
        let built = farthest_insertion(&tour, &distances);

        // selections run A, C, B; alternating placement yields A B C, whose
        // cycle length is twice the A-C span
        let names: Vec<_> = built.stops().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["s0", "s1", "s2"]);
        let span = tour.stops()[0].distance_to(&tour.stops()[2]);
        assert!((built.total_length() - 2.0 * span).abs() < 1e-6);
    }

    #[test]
    fn test_five_collinear_stops_reach_optimum() {
        let tour = equator_line(5);
        let distances = DistanceMatrix::from_stops(tour.stops());
        let built = farthest_insertion(&tour, &distances);

        // selection order 0 4 1 3 2, placed as 0 1 2 3 4
        let names: Vec<_> = built.stops().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["s0", "s1", "s2", "s3", "s4"]);
        assert!((built.total_length() - 8.0 * unit()).abs() < 1e-6 * unit());
    }

    #[test]
    fn test_two_stops() {
        let tour = equator_line(2);
        let distances = DistanceMatrix::from_stops(tour.stops());
        let built = farthest_insertion(&tour, &distances);
        assert_eq!(built.len(), 2);
        assert!((built.total_length() - 2.0 * unit()).abs() < 1e-6);
    }

    #[test]
    fn test_result_is_permutation() {
        let tour = Tour::new(vec![
            Stop::new("A", 12.0, 7.0, 0),
            Stop::new("B", -3.0, 44.0, 1),
            Stop::new("C", 51.0, -9.0, 2),
            Stop::new("D", 8.0, 8.0, 3),
            Stop::new("E", -28.0, 100.0, 4),
            Stop::new("F", 0.5, -63.0, 5),
        ]);
        let distances = DistanceMatrix::from_stops(tour.stops());
        let built = farthest_insertion(&tour, &distances);

        let mut indices: Vec<_> = built.stops().iter().map(|s| s.original_index()).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_duplicate_coordinates_do_not_stall() {
        // two stops share a location; the scan must still visit both
        let tour = Tour::new(vec![
            Stop::new("A", 0.0, 0.0, 0),
            Stop::new("B", 0.0, 0.0, 1),
            Stop::new("C", 0.0, 1.0, 2),
        ]);
        let distances = DistanceMatrix::from_stops(tour.stops());
        let built = farthest_insertion(&tour, &distances);
        let mut indices: Vec<_> = built.stops().iter().map(|s| s.original_index()).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_input_tour_unchanged() {
        let tour = equator_line(4);
        let distances = DistanceMatrix::from_stops(tour.stops());
        let _ = farthest_insertion(&tour, &distances);
        let names: Vec<_> = tour.stops().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["s0", "s1", "s2", "s3"]);
    }
}
