//! Preset container.
//!
//! A preset is the magic literal, a header token list and a body of named
//! blobs, with no outer length prefix:
//! - `layout`: token names and fixed counts
//! - `header`: name/value pairs (version, file type, comment)
//! - `body`: name/blob pairs dispatched to the section catalog
//! - `channel`: the root record tying the three together
//! - `error`: structural decode errors
//!
//! Decoding fails fast on the first structural error; encoding never fails.

pub mod body;
pub mod channel;
pub mod error;
pub mod header;
pub mod layout;

pub use body::Body;
pub use channel::DShowInputChannel;
pub use error::DecodeError;
pub use header::Header;
