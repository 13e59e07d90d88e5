//! Thin I/O collaborators around the heuristic engine.
//!
//! - [`input`] — stop-list file format
//! - [`options`] — command-line surface
//! - [`report`] — per-algorithm result lines

pub mod input;
pub mod options;
pub mod report;
