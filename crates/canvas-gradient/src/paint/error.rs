//! Gradient error types

use thiserror::Error;

/// Reason a color string was rejected by [`parse_color`](super::parse_color).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid color {input:?}")]
pub struct ColorParseError {
    pub input: String,
}

impl ColorParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self { input: input.to_owned() }
    }
}

/// Errors raised while building a gradient.
///
/// Both variants are input validation failures. A failed call leaves the
/// gradient exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    /// Color stop offset outside `[0, 1]` (or not a finite number).
    #[error("color stop offset {offset} out of bounds")]
    IndexSize { offset: f64 },

    /// Color stop text could not be parsed as a color.
    #[error("could not parse color for color stop: {0}")]
    Syntax(#[from] ColorParseError),
}

impl GradientError {
    /// Name of the exception a scripting host should raise for this error.
    pub fn exception_name(&self) -> &'static str {
        match self {
            GradientError::IndexSize { .. } => "IndexSizeError",
            GradientError::Syntax(_) => "SyntaxError",
        }
    }
}

/// Result type for gradient operations
pub type Result<T> = std::result::Result<T, GradientError>;
