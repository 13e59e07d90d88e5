//! Per-invocation algorithm dispatch.

use log::info;

use crate::constructive::farthest_insertion;
use crate::distance::DistanceMatrix;
use crate::io::options::Algorithm;
use crate::local_search::{adjacent_exchange_improve, any_exchange_improve};
use crate::models::Tour;

/// Runs one algorithm over a private copy of the initial tour.
///
/// The input tour is never mutated, so repeated invocations are independent
/// of one another. The distance matrix is rebuilt for each invocation and
/// discarded with it.
pub fn run_algorithm(algorithm: Algorithm, tour: &Tour) -> Tour {
    let result = match algorithm {
        Algorithm::Given => tour.clone(),
        Algorithm::Farthest => {
            let distances = DistanceMatrix::from_stops(tour.stops());
            farthest_insertion(tour, &distances)
        }
        Algorithm::ExchangeAdjacent => {
            let distances = DistanceMatrix::from_stops(tour.stops());
            adjacent_exchange_improve(tour, &distances)
        }
        Algorithm::ExchangeAny => {
            let distances = DistanceMatrix::from_stops(tour.stops());
            any_exchange_improve(tour, &distances)
        }
    };
    info!(
        "{}: n={} total={:.2}",
        algorithm.label(),
        result.len(),
        result.total_length(),
    );
    result
}
