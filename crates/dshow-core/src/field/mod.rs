//! Offset-addressed primitives and the field schema engine.
//!
//! Sections never index their buffers directly. Each one lists its fields
//! as [`Field`] descriptors and the engine in `schema` drives the
//! primitive reader and writer over that list:
//! - `layout`: primitive widths and fixed-point constants
//! - `reader`: bounds-checked reads with a sticky, check-once error
//! - `writer`: writes into a pre-sized buffer, dropping out-of-range writes
//! - `mapped`: enumerations physically stored as a single bool
//! - `schema`: `read_all`, `write_all` and `describe` over descriptors

pub mod error;
pub mod layout;
pub mod mapped;
pub mod reader;
pub mod schema;
pub mod writer;

pub use error::FieldError;
pub use mapped::{BoolMapped, EqDyn, EqType};
pub use reader::FieldReader;
pub use schema::{Field, FieldEntry, FieldRef, describe, read_all, write_all};
pub use writer::{FieldWriter, cstring_len};
