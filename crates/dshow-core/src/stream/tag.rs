use std::fmt;

use super::layout;

/// Wire type of the value that follows a tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Int32,
    String,
    TokenCount,
    Bytes,
    /// A tag byte outside the known set.
    Unknown(u8),
    /// Sentinel for a read past the end of the buffer.
    Invalid,
}

impl Tag {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            layout::TAG_INT32 => Tag::Int32,
            layout::TAG_STRING => Tag::String,
            layout::TAG_TOKEN_COUNT => Tag::TokenCount,
            layout::TAG_BYTES => Tag::Bytes,
            other => Tag::Unknown(other),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Tag::Int32 => layout::TAG_INT32,
            Tag::String => layout::TAG_STRING,
            Tag::TokenCount => layout::TAG_TOKEN_COUNT,
            Tag::Bytes => layout::TAG_BYTES,
            Tag::Unknown(byte) => byte,
            Tag::Invalid => layout::TAG_INVALID,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Int32 => write!(f, "Int32"),
            Tag::String => write!(f, "String"),
            Tag::TokenCount => write!(f, "TokenCount"),
            Tag::Bytes => write!(f, "Bytes"),
            Tag::Unknown(byte) => write!(f, "unknown (0x{byte:02x})"),
            Tag::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Read the tag byte at `offset`.
///
/// Always reports one consumed byte. An out-of-range offset yields
/// [`Tag::Invalid`]; callers treat it as the end of the stream.
///
/// # Examples
/// ```
/// use dshow_core::stream::{Tag, read_tag};
///
/// assert_eq!(read_tag(&[0x0a, 0x00], 0), (Tag::String, 1));
/// assert_eq!(read_tag(&[], 0), (Tag::Invalid, 1));
/// ```
pub fn read_tag(buf: &[u8], offset: usize) -> (Tag, usize) {
    let tag = buf
        .get(offset)
        .copied()
        .map_or(Tag::Invalid, Tag::from_byte);
    (tag, layout::TAG_LEN)
}

#[cfg(test)]
mod tests {
    use super::{Tag, read_tag};

    #[test]
    fn read_tag_known_bytes() {
        let buf = [0x06, 0x0a, 0x0b, 0x0d];
        assert_eq!(read_tag(&buf, 0).0, Tag::Int32);
        assert_eq!(read_tag(&buf, 1).0, Tag::String);
        assert_eq!(read_tag(&buf, 2).0, Tag::TokenCount);
        assert_eq!(read_tag(&buf, 3).0, Tag::Bytes);
    }

    #[test]
    fn read_tag_empty_buffer_is_invalid() {
        assert_eq!(read_tag(&[], 0), (Tag::Invalid, 1));
    }

    #[test]
    fn read_tag_past_end_is_invalid() {
        assert_eq!(read_tag(&[0x06], 1), (Tag::Invalid, 1));
    }

    #[test]
    fn read_tag_unknown_byte() {
        assert_eq!(read_tag(&[0x42], 0).0, Tag::Unknown(0x42));
    }

    #[test]
    fn tag_bytes_round_trip() {
        for tag in [Tag::Int32, Tag::String, Tag::TokenCount, Tag::Bytes] {
            assert_eq!(Tag::from_byte(tag.to_byte()), tag);
        }
    }
}
