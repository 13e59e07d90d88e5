//! Command-line surface.

use crate::error::{Error, Result};

/// One of the four selectable tour algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {
    Given,
    Farthest,
    ExchangeAdjacent,
    ExchangeAny,
}

impl Algorithm {
    /// Label printed at the start of this algorithm's report line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Given => "-given",
            Self::Farthest => "-farthest",
            Self::ExchangeAdjacent => "-exchange adjacent",
            Self::ExchangeAny => "-exchange any",
        }
    }
}

/// Parsed command line: the input file path and the algorithms to run, in
/// invocation order. Algorithms may repeat.
#[derive(Clone, Debug)]
pub struct ProgramOptions {
    pub input_path: String,
    pub algorithms: Vec<Algorithm>,
}

impl ProgramOptions {
    /// Parses the argument list, program name already stripped.
    ///
    /// The first argument is the input file path; each remaining argument
    /// selects an algorithm (`-given`, `-farthest`, or `-exchange` followed
    /// by `adjacent` or `any`). Every usage error is raised here, before any
    /// file is opened.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let input_path = args.next().ok_or(Error::MissingFilename)?.as_ref().to_owned();

        let mut algorithms = Vec::new();
        while let Some(arg) = args.next() {
            let algorithm = match arg.as_ref() {
                "-given" => Algorithm::Given,
                "-farthest" => Algorithm::Farthest,
                "-exchange" => match args.next() {
                    Some(sub) => match sub.as_ref() {
                        "adjacent" => Algorithm::ExchangeAdjacent,
                        "any" => Algorithm::ExchangeAny,
                        _ => return Err(Error::InvalidAlgorithmArguments),
                    },
                    None => return Err(Error::InvalidAlgorithmArguments),
                },
                _ => return Err(Error::InvalidAlgorithmArguments),
            };
            algorithms.push(algorithm);
        }

        Ok(Self {
            input_path,
            algorithms,
        })
    }
}
