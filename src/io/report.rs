//! Per-algorithm result lines.

use crate::io::options::Algorithm;
use crate::models::Tour;

/// Formats one result line: the algorithm label left-justified in an
/// 18-column field, a colon, the total tour length with two decimals in a
/// 13-column field, then the identifiers in visiting order with the first
/// repeated at the end to show closure of the cycle.
pub fn format_line(algorithm: Algorithm, tour: &Tour) -> String {
    let mut line = format!("{:<18}:{:13.2}", algorithm.label(), tour.total_length());
    for stop in tour.stops() {
        line.push(' ');
        line.push_str(stop.name());
    }
    if let Some(first) = tour.stops().first() {
        line.push(' ');
        line.push_str(first.name());
    }
    line
}
