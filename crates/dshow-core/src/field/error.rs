use thiserror::Error;

/// Errors latched by [`FieldReader`](super::FieldReader).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("read of {width} bytes at offset 0x{offset:04x} exceeds {len}-byte buffer")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error("unterminated string at offset 0x{offset:04x}")]
    UnterminatedString { offset: usize },
}
