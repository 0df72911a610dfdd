//! Section catalog.
//!
//! A preset body is a set of named, offset-addressed records. Each record
//! type implements [`Section`] by listing its fields; decoding, encoding and
//! dumps all run through the shared schema engine in `crate::field`.
//!
//! The catalog is closed: [`SectionKind`] names every section this crate
//! models, and [`SectionKind::ALL`] fixes the order in which a body is
//! encoded (sorted by name, so output is reproducible).

use crate::field::{self, Field, FieldEntry, FieldError, FieldReader, FieldWriter};

mod audio_master_strip;
mod audio_strip;
mod aux_busses_options;
mod aux_busses_options2;
mod bus_config_mode;
mod header;
mod input_strip;
mod matrix_master_strip;
mod mic_line_strips;
mod strip;
mod strip_type;

pub use audio_master_strip::AudioMasterStrip;
pub use audio_strip::AudioStrip;
pub use aux_busses_options::AuxBussesOptions;
pub use aux_busses_options2::AuxBussesOptions2;
pub use bus_config_mode::BusConfigMode;
pub use header::HeaderSection;
pub use input_strip::{AuxSend, EqBand, InputStrip};
pub use matrix_master_strip::MatrixMasterStrip;
pub use mic_line_strips::MicLineStrips;
pub use strip::Strip;
pub use strip_type::StripType;

/// Name of every modeled section, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    AudioMasterStrip,
    AudioStrip,
    AuxBussesOptions,
    AuxBussesOptions2,
    BusConfigMode,
    Header,
    InputStrip,
    MatrixMasterStrip,
    MicLineStrips,
    Strip,
    StripType,
}

impl SectionKind {
    /// Catalog in encode order (byte-wise sorted by name).
    pub const ALL: [SectionKind; 11] = [
        SectionKind::AudioMasterStrip,
        SectionKind::AudioStrip,
        SectionKind::AuxBussesOptions,
        SectionKind::AuxBussesOptions2,
        SectionKind::BusConfigMode,
        SectionKind::Header,
        SectionKind::InputStrip,
        SectionKind::MatrixMasterStrip,
        SectionKind::MicLineStrips,
        SectionKind::Strip,
        SectionKind::StripType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::AudioMasterStrip => "AudioMasterStrip",
            SectionKind::AudioStrip => "AudioStrip",
            SectionKind::AuxBussesOptions => "AuxBussesOptions",
            SectionKind::AuxBussesOptions2 => "AuxBussesOptions2",
            SectionKind::BusConfigMode => "BusConfigMode",
            SectionKind::Header => "Header",
            SectionKind::InputStrip => "InputStrip",
            SectionKind::MatrixMasterStrip => "MatrixMasterStrip",
            SectionKind::MicLineStrips => "MicLineStrips",
            SectionKind::Strip => "Strip",
            SectionKind::StripType => "StripType",
        }
    }

    /// Look up a section by its wire name; `None` for names outside the catalog.
    ///
    /// # Examples
    /// ```
    /// use dshow_core::SectionKind;
    ///
    /// assert_eq!(SectionKind::from_name("InputStrip"), Some(SectionKind::InputStrip));
    /// assert_eq!(SectionKind::from_name("Dynamics"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Sections only written by consoles that save the extended preset
    /// variant; old-style files omit them.
    pub fn is_extended(self) -> bool {
        matches!(
            self,
            SectionKind::AudioMasterStrip
                | SectionKind::AuxBussesOptions2
                | SectionKind::MatrixMasterStrip
        )
    }
}

/// A named binary record inside the preset body.
///
/// Implementors only describe their layout; the provided methods run the
/// schema engine over it.
pub trait Section: Clone {
    const KIND: SectionKind;

    /// Size of the buffer produced by [`Section::encode`].
    fn encoded_len(&self) -> usize;

    /// Field descriptors over this record's storage.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Hook run before the schema reads a blob of `blob_len` bytes.
    fn prepare_decode(&mut self, _blob_len: usize) {}

    /// Decode `bytes` into this record and return the consumed length.
    ///
    /// On error the record may be partially populated and must be discarded.
    fn decode(&mut self, bytes: &[u8]) -> Result<usize, FieldError> {
        self.prepare_decode(bytes.len());
        let mut reader = FieldReader::new(bytes);
        field::read_all(&mut reader, self.fields());
        reader.finish()?;
        Ok(self.encoded_len())
    }

    /// Encode into a zero-filled buffer of [`Section::encoded_len`] bytes.
    fn encode(&self) -> Vec<u8> {
        // The schema hands out mutable references, so read-only walks go
        // through a scratch copy.
        let mut scratch = self.clone();
        let mut writer = FieldWriter::new(scratch.encoded_len());
        field::write_all(&mut writer, scratch.fields());
        writer.into_inner()
    }

    fn entries(&self) -> Vec<FieldEntry> {
        let mut scratch = self.clone();
        field::describe(scratch.fields())
    }

    fn describe(&self) -> String {
        let mut out = format!("[{}] {} bytes\n", Self::KIND.name(), self.encoded_len());
        for entry in self.entries() {
            out.push_str(&format!(
                "  0x{:04x} {}: {}\n",
                entry.offset, entry.name, entry.value
            ));
        }
        out
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::fmt::Debug;

    use super::Section;
    use crate::field::{BoolMapped, FieldRef};

    pub(crate) fn assert_round_trip<S: Section + Default + PartialEq + Debug>(section: &S) {
        let bytes = section.encode();
        assert_eq!(bytes.len(), section.encoded_len());

        let mut decoded = S::default();
        let consumed = decoded.decode(&bytes).expect("decode encoded section");
        assert_eq!(consumed, bytes.len());
        assert_eq!(&decoded, section);
    }

    /// Round-trip a default record once per field, each time with only that
    /// field changed.
    pub(crate) fn assert_each_field_round_trips<S: Section + Default + PartialEq + Debug>() {
        let count = S::default().fields().len();
        assert!(count > 0);
        for index in 0..count {
            let mut section = S::default();
            if let Some(field) = section.fields().into_iter().nth(index) {
                poke(field.value);
            }
            assert_ne!(section, S::default(), "field {index} unchanged");
            assert_round_trip(&section);
        }
    }

    /// Every descriptor must sit inside the encoded buffer.
    pub(crate) fn assert_fields_fit<S: Section + Default>() {
        let mut section = S::default();
        let len = section.encoded_len();
        for field in section.fields() {
            let width = match field.value {
                FieldRef::Bool(_) | FieldRef::EqType(_) | FieldRef::EqDyn(_) => 1,
                FieldRef::Text(value) => crate::field::cstring_len(value),
                _ => 4,
            };
            assert!(
                field.offset + width <= len,
                "{} at 0x{:04x} overruns {len} bytes",
                field.name,
                field.offset
            );
        }
    }

    fn poke(value: FieldRef<'_>) {
        match value {
            FieldRef::Bool(value) => *value = !*value,
            FieldRef::Int32(value) => *value += 7,
            FieldRef::Scaled { value, .. } => *value += 3.5,
            FieldRef::Delay(value) => *value += 2.0,
            FieldRef::EqType(value) => *value = BoolMapped::from_bool(!value.to_bool()),
            FieldRef::EqDyn(value) => *value = BoolMapped::from_bool(!value.to_bool()),
            FieldRef::Text(value) => value.push_str("Vox"),
        }
    }
}
