pub const TAG_INT32: u8 = 0x06;
pub const TAG_STRING: u8 = 0x0a;
pub const TAG_TOKEN_COUNT: u8 = 0x0b;
pub const TAG_BYTES: u8 = 0x0d;
pub const TAG_INVALID: u8 = 0xff;

pub const TAG_LEN: usize = 1;
pub const INT32_LEN: usize = 4;
pub const STRING_TERMINATOR: u8 = 0x00;

/// Literal string that opens every preset file.
pub const MAGIC: &str = "Digidesign Storage - 1.0";
