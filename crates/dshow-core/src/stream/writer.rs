use super::layout;

/// Encoder for the token stream.
///
/// Writes never fail; the buffer grows as needed.
///
/// # Examples
/// ```
/// use dshow_core::stream::TokenWriter;
///
/// let mut writer = TokenWriter::new();
/// writer.write_string("Hi!");
/// assert_eq!(writer.into_inner(), vec![0x0a, 0x48, 0x69, 0x21, 0x00]);
/// ```
#[derive(Debug, Default)]
pub struct TokenWriter {
    buf: Vec<u8>,
}

impl TokenWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_int32(&mut self, value: i32) {
        self.buf.push(layout::TAG_INT32);
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_token_count(&mut self, count: i32) {
        self.buf.push(layout::TAG_TOKEN_COUNT);
        self.buf.extend_from_slice(&count.to_le_bytes());
    }

    /// Strings are written up to the first NUL, then a single terminator
    /// byte.
    pub fn write_string(&mut self, value: &str) {
        let value = value.split('\0').next().unwrap_or_default();
        self.buf.push(layout::TAG_STRING);
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.push(layout::STRING_TERMINATOR);
    }

    pub fn write_bytes(&mut self, value: &[u8]) {
        let length = i32::try_from(value.len()).unwrap_or(i32::MAX);
        self.buf.push(layout::TAG_BYTES);
        self.buf.extend_from_slice(&length.to_le_bytes());
        self.buf.extend_from_slice(value);
    }

    /// Append already encoded tokens.
    pub fn write_raw(&mut self, encoded: &[u8]) {
        self.buf.extend_from_slice(encoded);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::TokenWriter;

    fn encoded(f: impl FnOnce(&mut TokenWriter)) -> Vec<u8> {
        let mut writer = TokenWriter::new();
        f(&mut writer);
        writer.into_inner()
    }

    #[test]
    fn write_bytes_empty() {
        assert_eq!(
            encoded(|w| w.write_bytes(&[])),
            vec![0x0d, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn write_bytes_payload() {
        assert_eq!(
            encoded(|w| w.write_bytes(&[0x61, 0x62, 0x63])),
            vec![0x0d, 0x03, 0x00, 0x00, 0x00, 0x61, 0x62, 0x63]
        );
    }

    #[test]
    fn write_string_empty() {
        assert_eq!(encoded(|w| w.write_string("")), vec![0x0a, 0x00]);
    }

    #[test]
    fn write_string_payload() {
        assert_eq!(
            encoded(|w| w.write_string("Hi!")),
            vec![0x0a, 0x48, 0x69, 0x21, 0x00]
        );
    }

    #[test]
    fn write_string_stops_at_nul() {
        assert_eq!(
            encoded(|w| w.write_string("Hi\0there")),
            vec![0x0a, 0x48, 0x69, 0x00]
        );
    }

    #[test]
    fn write_int32_minus_one() {
        assert_eq!(
            encoded(|w| w.write_int32(-1)),
            vec![0x06, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn write_int32_zero() {
        assert_eq!(
            encoded(|w| w.write_int32(0)),
            vec![0x06, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn write_token_count_uses_count_tag() {
        assert_eq!(
            encoded(|w| w.write_token_count(3)),
            vec![0x0b, 0x03, 0x00, 0x00, 0x00]
        );
    }
}
