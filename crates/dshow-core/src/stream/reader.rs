use super::error::StreamError;
use super::layout;
use super::tag::{Tag, read_tag};

/// Cursor over a token stream.
///
/// Each `read_*` payload method expects the tag to have been consumed
/// already via [`TokenReader::read_tag`].
pub struct TokenReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Unread tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        self.buf.get(self.pos..).unwrap_or(&[])
    }

    pub fn read_tag(&mut self) -> Tag {
        let (tag, consumed) = read_tag(self.buf, self.pos);
        if tag != Tag::Invalid {
            self.pos += consumed;
        }
        tag
    }

    pub fn read_int32(&mut self) -> Result<i32, StreamError> {
        let bytes = self.take(layout::INT32_LEN)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_string(&mut self) -> Result<String, StreamError> {
        let start = self.pos;
        let tail = self.rest();
        let end = tail
            .iter()
            .position(|&b| b == layout::STRING_TERMINATOR)
            .ok_or(StreamError::UnterminatedString { offset: start })?;
        let value = String::from_utf8_lossy(&tail[..end]).into_owned();
        self.pos += end + 1;
        Ok(value)
    }

    pub fn read_bytes(&mut self) -> Result<&'a [u8], StreamError> {
        let offset = self.pos;
        let length = self.read_int32()?;
        let length = usize::try_from(length).map_err(|_| StreamError::InvalidLength {
            offset,
            length,
        })?;
        self.take(length)
    }

    /// Read a tag that must be `String`, then its payload.
    pub fn expect_string(&mut self) -> Result<String, StreamError> {
        let offset = self.pos;
        match self.read_tag() {
            Tag::String => self.read_string(),
            found => Err(StreamError::UnexpectedTag {
                offset,
                expected: Tag::String,
                found,
            }),
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], StreamError> {
        let end = self.pos.checked_add(len).ok_or(StreamError::TooShort {
            offset: self.pos,
            needed: len,
            actual: self.remaining(),
        })?;
        let bytes = self.buf.get(self.pos..end).ok_or(StreamError::TooShort {
            offset: self.pos,
            needed: len,
            actual: self.remaining(),
        })?;
        self.pos = end;
        Ok(bytes)
    }
}
