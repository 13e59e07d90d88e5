//! Domain model types for tour construction and improvement.
//!
//! Provides the core abstractions: named geographic stops carrying their
//! immutable input position, and cyclic tours over them.

mod stop;
mod tour;

pub use stop::Stop;
pub use tour::Tour;
