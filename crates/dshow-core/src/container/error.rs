use thiserror::Error;

use crate::field::FieldError;
use crate::stream::{StreamError, Tag};

/// Errors returned while decoding a preset.
///
/// # Examples
/// ```
/// use dshow_core::DecodeError;
///
/// let err = DecodeError::CountMismatch { expected: 3, found: 2 };
/// assert_eq!(err.to_string(), "expected 3 tokens, found 2");
/// ```
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Stream(#[from] StreamError),
    #[error("bad magic: expected {expected:?}, found {found:?}")]
    BadMagic {
        expected: &'static str,
        found: String,
    },
    #[error("unsupported Int32 token {name:?}")]
    UnsupportedInt32Token { name: String },
    #[error("unsupported String token {name:?}")]
    UnsupportedStringToken { name: String },
    #[error("unrecognized section {name:?}")]
    UnknownSection { name: String },
    #[error("unexpected {tag} tag at offset {offset}")]
    UnexpectedTag { tag: Tag, offset: usize },
    #[error("stream ended before a token count was declared")]
    MissingTokenCount,
    #[error("expected {expected} tokens, found {found}")]
    CountMismatch { expected: i32, found: i32 },
    #[error("section {section}: blob is {declared} bytes but {consumed} were consumed")]
    LengthMismatch {
        section: &'static str,
        declared: usize,
        consumed: usize,
    },
    #[error("section {section}: {source}")]
    Section {
        section: &'static str,
        #[source]
        source: FieldError,
    },
    #[error("{section}: {source}")]
    Within {
        section: &'static str,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Attach the name of the enclosing container part.
    pub fn within(self, section: &'static str) -> Self {
        DecodeError::Within {
            section,
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping `Within` context.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            DecodeError::Within { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
