//! Stop-list input format.
//!
//! The format is token-oriented and whitespace-delimited: an integer stop
//! count `n`, then `n` identifiers, then `n` latitude/longitude pairs in
//! identifier order. Tokens past the last coordinate are ignored.

use std::fs;
use std::str::SplitWhitespace;

use crate::error::{Error, Result};
use crate::models::Stop;

/// Reads stops from the file at `path`.
///
/// Unreadable files map to [`Error::CouldNotOpen`]; see [`parse_stops`] for
/// format errors.
pub fn read_stops(path: &str) -> Result<Vec<Stop>> {
    let text = fs::read_to_string(path).map_err(|_| Error::CouldNotOpen(path.to_owned()))?;
    parse_stops(&text)
}

/// Parses a stop list from input text.
///
/// Each stop's `original_index` is its 0-based position in the input. A
/// count below 2 fails with [`Error::TooFewCities`], checked before any
/// coordinate is parsed; missing or malformed tokens fail with
/// [`Error::InvalidInput`].
pub fn parse_stops(text: &str) -> Result<Vec<Stop>> {
    let mut tokens = text.split_whitespace();

    let count = next_token(&mut tokens, "stop count")?;
    let count: i64 = count
        .parse()
        .map_err(|_| Error::InvalidInput(format!("stop count {count:?} is not an integer")))?;
    if count < 2 {
        return Err(Error::TooFewCities);
    }
    let count = count as usize;

    let mut names = Vec::with_capacity(count);
    for _ in 0..count {
        names.push(next_token(&mut tokens, "stop name")?.to_owned());
    }

    let mut stops = Vec::with_capacity(count);
    for (index, name) in names.into_iter().enumerate() {
        let lat = next_float(&mut tokens, "latitude")?;
        let lon = next_float(&mut tokens, "longitude")?;
        stops.push(Stop::new(name, lat, lon, index));
    }
    Ok(stops)
}

fn next_token<'a>(tokens: &mut SplitWhitespace<'a>, what: &str) -> Result<&'a str> {
    tokens
        .next()
        .ok_or_else(|| Error::InvalidInput(format!("missing {what}")))
}

fn next_float(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<f64> {
    let token = next_token(tokens, what)?;
    token
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{what} {token:?} is not a number")))
}
