use super::body::Body;
use super::error::DecodeError;
use super::header::Header;
use crate::dump::{HeaderDump, PresetDump, SectionDump};
use crate::sections::SectionKind;
use crate::stream::layout::MAGIC;
use crate::stream::{TokenReader, TokenWriter};

/// A decoded "D-Show Input Channel" preset.
///
/// # Examples
/// ```
/// use dshow_core::DShowInputChannel;
///
/// let mut preset = DShowInputChannel::default();
/// preset.header.user_comment = "Kick drum".to_string();
/// preset.body.input_strip.phantom = true;
///
/// let bytes = preset.encode();
/// let decoded = DShowInputChannel::decode(&bytes)?;
/// assert_eq!(decoded.header.user_comment, "Kick drum");
/// assert!(decoded.body.input_strip.phantom);
/// # Ok::<(), dshow_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DShowInputChannel {
    pub header: Header,
    pub body: Body,
}

impl DShowInputChannel {
    /// Decode a complete preset.
    ///
    /// Bytes after the last body pair are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = TokenReader::new(bytes);
        let magic = reader.expect_string()?;
        if magic != MAGIC {
            return Err(DecodeError::BadMagic {
                expected: MAGIC,
                found: magic,
            });
        }

        let mut channel = Self::default();
        let mut offset = reader.position();
        offset += channel
            .header
            .decode(bytes.get(offset..).unwrap_or_default())
            .map_err(|err| err.within("Header"))?;
        offset += channel
            .body
            .decode(bytes.get(offset..).unwrap_or_default())
            .map_err(|err| err.within("Body"))?;

        if offset < bytes.len() {
            log::debug!("ignoring {} trailing bytes", bytes.len() - offset);
        }
        Ok(channel)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = TokenWriter::new();
        writer.write_string(MAGIC);
        writer.write_raw(&self.header.encode());
        writer.write_raw(&self.body.encode());
        writer.into_inner()
    }

    /// Human-readable listing of the header and every section.
    pub fn describe(&self) -> String {
        let mut out = self.header.describe();
        out.push_str(&self.body.describe());
        out
    }

    /// Serializable view of the preset, sections in encode order.
    pub fn dump(&self) -> PresetDump {
        PresetDump {
            magic: MAGIC.to_string(),
            header: HeaderDump {
                version: self.header.version,
                file_type: self.header.file_type.clone(),
                user_comment: self.header.user_comment.clone(),
            },
            sections: SectionKind::ALL
                .into_iter()
                .map(|kind| SectionDump {
                    name: kind.name().to_string(),
                    size: self.body.section_len(kind),
                    decoded: self.body.was_decoded(kind),
                    fields: self.body.section_entries(kind),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DShowInputChannel;
    use crate::container::error::DecodeError;
    use crate::stream::TokenWriter;
    use crate::stream::layout::MAGIC;

    #[test]
    fn starts_with_magic_string() {
        let bytes = DShowInputChannel::default().encode();
        let mut expected = vec![0x0a];
        expected.extend_from_slice(MAGIC.as_bytes());
        expected.push(0);
        assert_eq!(&bytes[..expected.len()], expected.as_slice());
    }

    #[test]
    fn default_round_trips() {
        let preset = DShowInputChannel::default();
        let decoded = DShowInputChannel::decode(&preset.encode()).unwrap();
        assert_eq!(decoded.header, preset.header);
        assert_eq!(decoded.encode(), preset.encode());
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let mut writer = TokenWriter::new();
        writer.write_string("Digidesign Storage - 2.0");
        let err = DShowInputChannel::decode(&writer.into_inner()).unwrap_err();
        assert!(matches!(err, DecodeError::BadMagic { ref found, .. } if found.ends_with("2.0")));
    }

    #[test]
    fn missing_magic_is_rejected() {
        let err = DShowInputChannel::decode(&[0x06, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, DecodeError::Stream(_)));
    }

    #[test]
    fn header_errors_carry_context() {
        let mut writer = TokenWriter::new();
        writer.write_string(MAGIC);
        writer.write_token_count(3);
        writer.write_string("Version");
        writer.write_int32(1);
        let err = DShowInputChannel::decode(&writer.into_inner()).unwrap_err();
        assert_eq!(err.to_string(), "Header: expected 3 tokens, found 1");
    }

    #[test]
    fn body_errors_carry_context() {
        let mut writer = TokenWriter::new();
        writer.write_string(MAGIC);
        writer.write_raw(&crate::Header::default().encode());
        writer.write_token_count(1);
        writer.write_string("Dynamics");
        writer.write_bytes(&[]);
        let err = DShowInputChannel::decode(&writer.into_inner()).unwrap_err();
        assert_eq!(err.to_string(), "Body: unrecognized section \"Dynamics\"");
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = DShowInputChannel::default().encode();
        bytes.extend_from_slice(&[0xde, 0xad]);
        assert!(DShowInputChannel::decode(&bytes).is_ok());
    }

    #[test]
    fn describe_covers_header_and_sections() {
        let text = DShowInputChannel::default().describe();
        assert!(text.starts_with("[File Header]\n  Version: 1\n"));
        assert!(text.contains("[InputStrip] 232 bytes\n"));
        assert!(text.contains("  0x0021 EQ Band 2 Type: Curve\n"));
    }
}
