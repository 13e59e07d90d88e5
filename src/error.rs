//! Crate error type.

use thiserror::Error as ThisError;

/// Errors surfaced by the command-line layer and the input parser.
///
/// The algorithms themselves have no failure modes; every variant here is
/// fatal and reported before any algorithm output is produced.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("missing filename")]
    MissingFilename,
    #[error("could not open {0}")]
    CouldNotOpen(String),
    #[error("invalid algorithm arguments")]
    InvalidAlgorithmArguments,
    #[error("too few cities")]
    TooFewCities,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
