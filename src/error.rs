//! Error types for chromaset operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chromaset operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed RGB, HSV or hex input to a color constructor.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unknown rule, policy or system name, out-of-range slot index,
    /// or a malformed grid specification.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The RGB to HSV sector algorithm found no sector for these channels.
    #[error("Ambiguous RGB to HSV conversion for channels ({r}, {g}, {b})")]
    AmbiguousConversion {
        /// Red channel.
        r: f64,
        /// Green channel.
        g: f64,
        /// Blue channel.
        b: f64,
    },

    /// Configuration parsing error with line number.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// 1-based line of the offending input (0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

impl Error {
    pub(crate) fn slot(index: usize) -> Self {
        Self::InvalidArgument(format!("slot index {index} is outside 0..5"))
    }
}
