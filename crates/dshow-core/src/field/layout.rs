pub const BOOL_LEN: usize = 1;
pub const INT32_LEN: usize = 4;

/// Tenths (gain, fader, pan).
pub const SCALE_TENTHS: i32 = 10;
/// Hundredths (EQ Q, fine trims).
pub const SCALE_HUNDREDTHS: i32 = 100;
/// Delay is stored in samples at 96 kHz and exposed in milliseconds.
pub const DELAY_SCALE: i32 = 96;
