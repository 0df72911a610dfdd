use super::error::DecodeError;
use super::layout;
use crate::stream::{Tag, TokenReader, TokenWriter};

/// Container header: a token count followed by name/value pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Pair count declared by the last decode. Encoding ignores it and
    /// always declares the three known pairs.
    pub token_count: i32,
    pub version: i32,
    pub file_type: String,
    pub user_comment: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            token_count: layout::HEADER_TOKEN_COUNT,
            version: layout::DEFAULT_VERSION,
            file_type: layout::DEFAULT_FILE_TYPE.to_string(),
            user_comment: String::new(),
        }
    }
}

impl Header {
    /// Decode the header at the start of `bytes`, returning the consumed
    /// length.
    ///
    /// Stops as soon as the declared number of pairs has been resolved;
    /// anything after that belongs to the body.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<usize, DecodeError> {
        let mut reader = TokenReader::new(bytes);
        let mut declared: Option<i32> = None;
        let mut pending: Option<String> = None;
        let mut resolved = 0;

        while declared != Some(resolved) {
            let offset = reader.position();
            match reader.read_tag() {
                Tag::TokenCount if declared.is_none() => {
                    declared = Some(reader.read_int32()?);
                }
                Tag::Int32 => {
                    let value = reader.read_int32()?;
                    match pending.take() {
                        Some(name) if name == layout::VERSION_TOKEN => self.version = value,
                        name => {
                            return Err(DecodeError::UnsupportedInt32Token {
                                name: name.unwrap_or_default(),
                            });
                        }
                    }
                    resolved += 1;
                }
                Tag::String => {
                    let value = reader.read_string()?;
                    let Some(name) = pending.take() else {
                        log::trace!("header token {value:?} at offset {offset}");
                        pending = Some(value);
                        continue;
                    };
                    match name.as_str() {
                        layout::FILE_TYPE_TOKEN => self.file_type = value,
                        layout::USER_COMMENT_TOKEN => self.user_comment = value,
                        _ => return Err(DecodeError::UnsupportedStringToken { name }),
                    }
                    resolved += 1;
                }
                Tag::Invalid => {
                    return Err(match declared {
                        Some(expected) => DecodeError::CountMismatch {
                            expected,
                            found: resolved,
                        },
                        None => DecodeError::MissingTokenCount,
                    });
                }
                tag => return Err(DecodeError::UnexpectedTag { tag, offset }),
            }
        }

        self.token_count = resolved;
        log::debug!(
            "decoded header: version {}, {resolved} tokens, {} bytes",
            self.version,
            reader.position()
        );
        Ok(reader.position())
    }

    /// Encode in the fixed order Version, File Type, User Comment.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = TokenWriter::new();
        writer.write_token_count(layout::HEADER_TOKEN_COUNT);
        writer.write_string(layout::VERSION_TOKEN);
        writer.write_int32(self.version);
        writer.write_string(layout::FILE_TYPE_TOKEN);
        writer.write_string(&self.file_type);
        writer.write_string(layout::USER_COMMENT_TOKEN);
        writer.write_string(&self.user_comment);
        writer.into_inner()
    }

    pub fn describe(&self) -> String {
        format!(
            "[File Header]\n  Version: {}\n  File Type: {:?}\n  User Comment: {:?}\n",
            self.version, self.file_type, self.user_comment
        )
    }
}
