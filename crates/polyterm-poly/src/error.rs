//! Errors raised while building term lists from text.

use thiserror::Error;

/// Errors that can occur while reading a polynomial.
///
/// Line numbers are 1-based positions in the supplied input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid coefficient `{token}`")]
    InvalidCoefficient { line: usize, token: String },

    #[error("line {line}: invalid degree `{token}`, expected an integer in 0..=4294967295")]
    InvalidDegree { line: usize, token: String },

    #[error("line {line}: degree {degree} does not follow degree {previous} in order")]
    OutOfOrder {
        line: usize,
        previous: u64,
        degree: u64,
    },

    #[error("failed to read polynomial input")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Returns the offending line, if the error is tied to one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingField { line, .. }
            | Self::InvalidCoefficient { line, .. }
            | Self::InvalidDegree { line, .. }
            | Self::OutOfOrder { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
