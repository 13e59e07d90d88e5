//! Constructive heuristics for building initial tours.
//!
//! - [`farthest_insertion`] — Greedy farthest-first selection with
//!   alternating front/back placement, O(n²)

mod farthest_insertion;

pub use farthest_insertion::farthest_insertion;
