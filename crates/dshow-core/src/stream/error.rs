use thiserror::Error;

use super::tag::Tag;

/// Errors returned while walking the token stream.
///
/// # Examples
/// ```
/// use dshow_core::stream::StreamError;
///
/// let err = StreamError::TooShort { offset: 3, needed: 4, actual: 1 };
/// assert!(err.to_string().contains("offset 3"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("buffer too short at offset {offset}: need {needed} bytes, got {actual}")]
    TooShort {
        offset: usize,
        needed: usize,
        actual: usize,
    },
    #[error("unterminated string at offset {offset}")]
    UnterminatedString { offset: usize },
    #[error("invalid blob length {length} at offset {offset}")]
    InvalidLength { offset: usize, length: i32 },
    #[error("expected {expected} tag at offset {offset}, found {found}")]
    UnexpectedTag {
        offset: usize,
        expected: Tag,
        found: Tag,
    },
}
