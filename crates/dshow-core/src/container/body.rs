use super::error::DecodeError;
use crate::field::FieldEntry;
use crate::sections::{
    AudioMasterStrip, AudioStrip, AuxBussesOptions, AuxBussesOptions2, BusConfigMode,
    HeaderSection, InputStrip, MatrixMasterStrip, MicLineStrips, Section, SectionKind, Strip,
    StripType,
};
use crate::stream::{Tag, TokenReader, TokenWriter};

/// Call the same [`Section`] method on the record selected by `kind`.
macro_rules! on_section {
    ($body:expr, $kind:expr, $method:ident($($arg:expr),*)) => {
        match $kind {
            SectionKind::AudioMasterStrip => $body.audio_master_strip.$method($($arg),*),
            SectionKind::AudioStrip => $body.audio_strip.$method($($arg),*),
            SectionKind::AuxBussesOptions => $body.aux_busses_options.$method($($arg),*),
            SectionKind::AuxBussesOptions2 => $body.aux_busses_options2.$method($($arg),*),
            SectionKind::BusConfigMode => $body.bus_config_mode.$method($($arg),*),
            SectionKind::Header => $body.header.$method($($arg),*),
            SectionKind::InputStrip => $body.input_strip.$method($($arg),*),
            SectionKind::MatrixMasterStrip => $body.matrix_master_strip.$method($($arg),*),
            SectionKind::MicLineStrips => $body.mic_line_strips.$method($($arg),*),
            SectionKind::Strip => $body.strip.$method($($arg),*),
            SectionKind::StripType => $body.strip_type.$method($($arg),*),
        }
    };
}

/// Container body: one record per catalog entry.
///
/// Every record is always present. Decoding overwrites the records named in
/// the input and leaves the rest at their defaults; encoding writes all of
/// them in [`SectionKind::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Pair count declared by the last decode. Encoding ignores it and
    /// declares one pair per catalog entry.
    pub token_count: i32,
    pub audio_master_strip: AudioMasterStrip,
    pub audio_strip: AudioStrip,
    pub aux_busses_options: AuxBussesOptions,
    pub aux_busses_options2: AuxBussesOptions2,
    pub bus_config_mode: BusConfigMode,
    pub header: HeaderSection,
    pub input_strip: InputStrip,
    pub matrix_master_strip: MatrixMasterStrip,
    pub mic_line_strips: MicLineStrips,
    pub strip: Strip,
    pub strip_type: StripType,
    decoded: Vec<SectionKind>,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            token_count: catalog_len(),
            audio_master_strip: AudioMasterStrip::default(),
            audio_strip: AudioStrip::default(),
            aux_busses_options: AuxBussesOptions::default(),
            aux_busses_options2: AuxBussesOptions2::default(),
            bus_config_mode: BusConfigMode::default(),
            header: HeaderSection::default(),
            input_strip: InputStrip::default(),
            matrix_master_strip: MatrixMasterStrip::default(),
            mic_line_strips: MicLineStrips::default(),
            strip: Strip::default(),
            strip_type: StripType::default(),
            decoded: Vec::new(),
        }
    }
}

impl Body {
    /// Decode the body at the start of `bytes`, returning the consumed
    /// length.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<usize, DecodeError> {
        self.decoded.clear();
        let mut reader = TokenReader::new(bytes);
        let mut declared: Option<i32> = None;
        let mut pending: Option<String> = None;
        let mut dispatched = 0;

        while declared != Some(dispatched) {
            let offset = reader.position();
            match reader.read_tag() {
                Tag::TokenCount if declared.is_none() => {
                    declared = Some(reader.read_int32()?);
                }
                Tag::String if pending.is_none() => {
                    pending = Some(reader.read_string()?);
                }
                Tag::Bytes if pending.is_some() => {
                    let name = pending.take().unwrap_or_default();
                    let kind = SectionKind::from_name(&name)
                        .ok_or(DecodeError::UnknownSection { name })?;
                    let blob = reader.read_bytes()?;
                    self.decode_section(kind, blob)?;
                    dispatched += 1;
                }
                Tag::Invalid => {
                    return Err(match declared {
                        Some(expected) => DecodeError::CountMismatch {
                            expected,
                            found: dispatched,
                        },
                        None => DecodeError::MissingTokenCount,
                    });
                }
                tag => return Err(DecodeError::UnexpectedTag { tag, offset }),
            }
        }

        self.token_count = dispatched;
        log::debug!(
            "decoded body: {dispatched} sections, {} bytes",
            reader.position()
        );
        Ok(reader.position())
    }

    /// Encode every catalog entry, whether or not a decode populated it.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = TokenWriter::new();
        writer.write_token_count(catalog_len());
        for kind in SectionKind::ALL {
            writer.write_string(kind.name());
            writer.write_bytes(&self.encode_section(kind));
        }
        writer.into_inner()
    }

    /// Sections named by the last decode, in input order.
    pub fn decoded_sections(&self) -> &[SectionKind] {
        &self.decoded
    }

    pub fn was_decoded(&self, kind: SectionKind) -> bool {
        self.decoded.contains(&kind)
    }

    pub fn encode_section(&self, kind: SectionKind) -> Vec<u8> {
        on_section!(self, kind, encode())
    }

    pub fn section_len(&self, kind: SectionKind) -> usize {
        on_section!(self, kind, encoded_len())
    }

    pub fn section_entries(&self, kind: SectionKind) -> Vec<FieldEntry> {
        on_section!(self, kind, entries())
    }

    pub fn describe_section(&self, kind: SectionKind) -> String {
        on_section!(self, kind, describe())
    }

    pub fn describe(&self) -> String {
        SectionKind::ALL
            .into_iter()
            .map(|kind| self.describe_section(kind))
            .collect()
    }

    fn decode_section(&mut self, kind: SectionKind, blob: &[u8]) -> Result<(), DecodeError> {
        log::trace!("dispatching {}-byte blob to {}", blob.len(), kind.name());
        let consumed =
            on_section!(self, kind, decode(blob)).map_err(|source| DecodeError::Section {
                section: kind.name(),
                source,
            })?;
        if consumed != blob.len() {
            return Err(DecodeError::LengthMismatch {
                section: kind.name(),
                declared: blob.len(),
                consumed,
            });
        }
        if !self.decoded.contains(&kind) {
            self.decoded.push(kind);
        }
        Ok(())
    }
}

fn catalog_len() -> i32 {
    SectionKind::ALL.len() as i32
}
