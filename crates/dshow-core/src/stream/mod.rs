//! Tag-delimited token stream.
//!
//! Every value in a preset is preceded by a single tag byte naming its wire
//! type. The module is split the same way as the section decoders:
//! - `layout`: tag bytes, widths and the magic literal
//! - `tag`: tag recognition over a raw buffer
//! - `reader`: cursor-based token reads with bounds checks
//! - `writer`: the mirror encoder
//! - `error`: truncation and framing errors, always reported with an offset
//!
//! Whether a `String` token is a name or a value is not encoded on the wire;
//! the container decoders track that as explicit state.

pub mod error;
pub mod layout;
pub mod reader;
pub mod tag;
pub mod writer;

pub use error::StreamError;
pub use reader::TokenReader;
pub use tag::{Tag, read_tag};
pub use writer::TokenWriter;
