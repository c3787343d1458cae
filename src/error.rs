//! Error types for the uLisp scanner

use thiserror::Error;

/// Scanner errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// End of input reached inside a string literal
    ///
    /// **Triggered by:** A string with no closing quote, or a backslash as the last character
    /// **Example:** `"abc` followed by end of input
    #[error("found EOF while reading a string (line {line})")]
    UnterminatedString {
        /// Line on which the input ran out
        line: usize,
    },

    /// Escape code outside the supported set
    ///
    /// **Triggered by:** A backslash followed by anything other than `\ " b f n r t v`
    /// **Example:** `"esc\q"`
    #[error("unsupported escape sequence in string: \\{escape} (line {line})")]
    UnsupportedEscape {
        /// The character following the backslash
        escape: char,
        /// Line containing the escape
        line: usize,
    },

    /// Numeric literal that does not fit its token type
    ///
    /// **Triggered by:** An integer outside `i32`, or a float that is not finite as `f32`
    /// **Example:** `2147483648`, `1e+99`
    #[error("numeric literal out of range: {literal} (line {line})")]
    NumberOutOfRange {
        /// The literal text as written
        literal: String,
        /// Line containing the literal
        line: usize,
    },

    /// Reading from the line source failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Line the error was detected on, if it came from the scanner itself
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnterminatedString { line }
            | Error::UnsupportedEscape { line, .. }
            | Error::NumberOutOfRange { line, .. } => Some(*line),
            Error::Io(_) => None,
        }
    }

    /// Whether scanning can resume after [`SExprScanner::skip_line`](crate::SExprScanner::skip_line)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, Error>;
