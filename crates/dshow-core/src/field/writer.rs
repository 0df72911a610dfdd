use super::layout;
use super::mapped::BoolMapped;

/// Primitive writer over a zero-filled, pre-sized section buffer.
///
/// Writes that do not fit are dropped; the buffer never grows.
///
/// # Examples
/// ```
/// use dshow_core::field::FieldWriter;
///
/// let mut writer = FieldWriter::new(4);
/// writer.write_scaled(0, 5.0, 10);
/// writer.write_int32(2, 7);
/// assert_eq!(writer.into_inner(), vec![50, 0, 0, 0]);
/// ```
#[derive(Debug)]
pub struct FieldWriter {
    buf: Vec<u8>,
}

impl FieldWriter {
    pub fn new(len: usize) -> Self {
        Self { buf: vec![0; len] }
    }

    pub fn write_bool(&mut self, offset: usize, value: bool) {
        self.put(offset, &[u8::from(value)]);
    }

    pub fn write_int32(&mut self, offset: usize, value: i32) {
        self.put(offset, &value.to_le_bytes());
    }

    pub fn write_scaled(&mut self, offset: usize, value: f32, divisor: i32) {
        let raw = (value * divisor as f32).round() as i32;
        self.write_int32(offset, raw);
    }

    /// Truncates to whole milliseconds before scaling.
    pub fn write_delay(&mut self, offset: usize, value: f32) {
        let raw = (value.trunc() as i32).saturating_mul(layout::DELAY_SCALE);
        self.write_int32(offset, raw);
    }

    pub fn write_mapped<T: BoolMapped>(&mut self, offset: usize, value: T) {
        self.write_bool(offset, value.to_bool());
    }

    /// Writes one byte per char up to the first NUL, then the terminator.
    /// Chars above U+00FF become `?`.
    pub fn write_cstring(&mut self, offset: usize, value: &str) {
        let mut bytes: Vec<u8> = cstring_chars(value)
            .map(|c| u8::try_from(c).unwrap_or(b'?'))
            .collect();
        bytes.push(0);
        self.put(offset, &bytes);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    fn put(&mut self, offset: usize, bytes: &[u8]) {
        let target = offset
            .checked_add(bytes.len())
            .and_then(|end| self.buf.get_mut(offset..end));
        match target {
            Some(target) => target.copy_from_slice(bytes),
            None => log::debug!(
                "dropping {}-byte write at offset 0x{offset:04x}: buffer is {} bytes",
                bytes.len(),
                self.buf.len()
            ),
        }
    }
}

/// Bytes [`FieldWriter::write_cstring`] emits for `value`, terminator
/// included.
pub fn cstring_len(value: &str) -> usize {
    cstring_chars(value).count() + 1
}

fn cstring_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().take_while(|&c| c != '\0')
}
