//! Error types for time parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a timestamp into an [`crate::Instant`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A date or time field is missing or not a number.
    Parse(&'static str),
    /// A field parsed but lies outside its calendar range.
    OutOfRange(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(field) => write!(f, "cannot parse {field}"),
            Self::OutOfRange(msg) => write!(f, "out of range: {msg}"),
        }
    }
}

impl Error for TimeError {}
