//! Serializable preset dump.

use serde::{Deserialize, Serialize};

use crate::field::FieldEntry;

/// Whole-preset dump with sections in encode order.
///
/// # Examples
/// ```
/// use dshow_core::DShowInputChannel;
///
/// let dump = DShowInputChannel::default().dump();
/// assert_eq!(dump.sections.len(), 11);
/// assert!(dump.sections.iter().all(|section| !section.decoded));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetDump {
    /// Leading magic literal.
    pub magic: String,
    pub header: HeaderDump,
    pub sections: Vec<SectionDump>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderDump {
    pub version: i32,
    pub file_type: String,
    pub user_comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDump {
    /// Section name as written on the wire.
    pub name: String,
    /// Encoded blob size in bytes.
    pub size: usize,
    /// Whether the decoded input contained this section. Encoding writes
    /// every section regardless.
    pub decoded: bool,
    /// Fields in offset order.
    pub fields: Vec<FieldEntry>,
}
