//! Codec for "D-Show Input Channel" console presets.
//!
//! A preset is a tag-delimited token stream: the magic literal
//! `"Digidesign Storage - 1.0"`, a header of name/value pairs, and a body
//! of name/blob pairs. Each blob is a fixed-layout section (input strip,
//! aux options, ...) whose fields live at fixed byte offsets with
//! per-field fixed-point conventions.
//!
//! The crate is layered the same way throughout:
//! - `stream`: tags and token reads/writes (no knowledge of sections)
//! - `field`: offset-addressed primitives and the schema engine
//! - `sections`: the catalog of section layouts
//! - `container`: header, body dispatch and the root record
//!
//! Everything here is pure and synchronous: decode consumes a byte slice,
//! encode returns a fresh `Vec<u8>`. File access belongs to the caller.
//!
//! Known limitations, kept on purpose:
//! - bytes a section does not model are written back as zero;
//! - encoding always writes every catalog section, so re-encoding an
//!   old-style preset adds the extended-variant sections.
//!
//! # Examples
//! ```
//! use dshow_core::{DShowInputChannel, EqType};
//!
//! let mut preset = DShowInputChannel::default();
//! preset.body.input_strip.eq_bands[0].kind = EqType::Curve;
//! preset.body.audio_strip.delay = 4.0;
//!
//! let decoded = DShowInputChannel::decode(&preset.encode())?;
//! assert_eq!(decoded.body.input_strip.eq_bands[0].kind, EqType::Curve);
//! assert_eq!(decoded.body.audio_strip.delay, 4.0);
//! # Ok::<(), dshow_core::DecodeError>(())
//! ```

pub mod container;
mod dump;
pub mod field;
pub mod sections;
pub mod stream;

pub use container::{Body, DShowInputChannel, DecodeError, Header};
pub use dump::{HeaderDump, PresetDump, SectionDump};
pub use field::{EqDyn, EqType, FieldEntry, FieldError};
pub use sections::{Section, SectionKind};
pub use stream::StreamError;
pub use stream::layout::MAGIC;
