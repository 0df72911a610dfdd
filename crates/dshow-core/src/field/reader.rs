use super::error::FieldError;
use super::layout;
use super::mapped::BoolMapped;

/// Primitive reader over one section buffer.
///
/// The first failing read latches an error and every later read returns a
/// zero value. Read a whole batch, then call [`FieldReader::finish`] once.
///
/// # Examples
/// ```
/// use dshow_core::field::FieldReader;
///
/// let buf = [50, 0, 0, 0];
/// let mut reader = FieldReader::new(&buf);
/// assert_eq!(reader.read_scaled(0, 10), 5.0);
/// assert_eq!(reader.read_int32(2), 0);
/// assert!(reader.finish().is_err());
/// ```
pub struct FieldReader<'a> {
    buf: &'a [u8],
    error: Option<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, error: None }
    }

    pub fn read_bool(&mut self, offset: usize) -> bool {
        self.slice(offset, layout::BOOL_LEN)
            .is_some_and(|bytes| bytes[0] != 0)
    }

    pub fn read_int32(&mut self, offset: usize) -> i32 {
        self.slice(offset, layout::INT32_LEN)
            .map_or(0, |b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_scaled(&mut self, offset: usize, divisor: i32) -> f32 {
        self.read_int32(offset) as f32 / divisor as f32
    }

    /// Whole milliseconds; the sample remainder is truncated toward zero.
    pub fn read_delay(&mut self, offset: usize) -> f32 {
        (self.read_int32(offset) / layout::DELAY_SCALE) as f32
    }

    pub fn read_mapped<T: BoolMapped>(&mut self, offset: usize) -> T {
        T::from_bool(self.read_bool(offset))
    }

    /// Null-terminated single-byte text starting at `offset`. Each byte maps
    /// to the char of the same code point, so the name keeps its wire length.
    pub fn read_cstring(&mut self, offset: usize) -> String {
        if self.error.is_some() {
            return String::new();
        }
        let Some(tail) = self.buf.get(offset..) else {
            self.latch(FieldError::OutOfRange {
                offset,
                width: 1,
                len: self.buf.len(),
            });
            return String::new();
        };
        match tail.iter().position(|&b| b == 0) {
            Some(end) => tail[..end].iter().copied().map(char::from).collect(),
            None => {
                self.latch(FieldError::UnterminatedString { offset });
                String::new()
            }
        }
    }

    /// Consume the reader, reporting the first failed read if any.
    pub fn finish(self) -> Result<(), FieldError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn slice(&mut self, offset: usize, width: usize) -> Option<&'a [u8]> {
        if self.error.is_some() {
            return None;
        }
        let bytes = offset
            .checked_add(width)
            .and_then(|end| self.buf.get(offset..end));
        if bytes.is_none() {
            self.latch(FieldError::OutOfRange {
                offset,
                width,
                len: self.buf.len(),
            });
        }
        bytes
    }

    fn latch(&mut self, err: FieldError) {
        log::trace!("field read failed: {err}");
        self.error.get_or_insert(err);
    }
}
