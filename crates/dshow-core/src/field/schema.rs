use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::layout;
use super::mapped::{EqDyn, EqType};
use super::reader::FieldReader;
use super::writer::FieldWriter;

/// Typed handle on a section field, tagged with its wire encoding.
#[derive(Debug)]
pub enum FieldRef<'a> {
    Bool(&'a mut bool),
    Int32(&'a mut i32),
    /// Stored as Int32, exposed as `stored / divisor`.
    Scaled { value: &'a mut f32, divisor: i32 },
    /// Stored as samples at 96 kHz, exposed as whole milliseconds.
    Delay(&'a mut f32),
    EqType(&'a mut EqType),
    EqDyn(&'a mut EqDyn),
    /// Null-terminated ASCII.
    Text(&'a mut String),
}

/// One schema entry: a name, a byte offset and the storage it maps to.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: Cow<'static, str>,
    pub offset: usize,
    pub value: FieldRef<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: impl Into<Cow<'static, str>>, offset: usize, value: FieldRef<'a>) -> Self {
        Self {
            name: name.into(),
            offset,
            value,
        }
    }

    pub fn bool(name: impl Into<Cow<'static, str>>, offset: usize, value: &'a mut bool) -> Self {
        Self::new(name, offset, FieldRef::Bool(value))
    }

    pub fn int32(name: impl Into<Cow<'static, str>>, offset: usize, value: &'a mut i32) -> Self {
        Self::new(name, offset, FieldRef::Int32(value))
    }

    pub fn tenths(name: impl Into<Cow<'static, str>>, offset: usize, value: &'a mut f32) -> Self {
        Self::new(
            name,
            offset,
            FieldRef::Scaled {
                value,
                divisor: layout::SCALE_TENTHS,
            },
        )
    }

    pub fn hundredths(
        name: impl Into<Cow<'static, str>>,
        offset: usize,
        value: &'a mut f32,
    ) -> Self {
        Self::new(
            name,
            offset,
            FieldRef::Scaled {
                value,
                divisor: layout::SCALE_HUNDREDTHS,
            },
        )
    }

    pub fn delay(name: impl Into<Cow<'static, str>>, offset: usize, value: &'a mut f32) -> Self {
        Self::new(name, offset, FieldRef::Delay(value))
    }

    pub fn eq_type(
        name: impl Into<Cow<'static, str>>,
        offset: usize,
        value: &'a mut EqType,
    ) -> Self {
        Self::new(name, offset, FieldRef::EqType(value))
    }

    pub fn eq_dyn(name: impl Into<Cow<'static, str>>, offset: usize, value: &'a mut EqDyn) -> Self {
        Self::new(name, offset, FieldRef::EqDyn(value))
    }

    pub fn text(name: impl Into<Cow<'static, str>>, offset: usize, value: &'a mut String) -> Self {
        Self::new(name, offset, FieldRef::Text(value))
    }
}

/// Rendered field for dumps, in offset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub offset: usize,
    pub value: String,
}

/// Populate every field from the reader.
///
/// Errors stay latched in `reader`; check them with `finish`.
pub fn read_all(reader: &mut FieldReader<'_>, fields: Vec<Field<'_>>) {
    for field in fields {
        let offset = field.offset;
        match field.value {
            FieldRef::Bool(value) => *value = reader.read_bool(offset),
            FieldRef::Int32(value) => *value = reader.read_int32(offset),
            FieldRef::Scaled { value, divisor } => *value = reader.read_scaled(offset, divisor),
            FieldRef::Delay(value) => *value = reader.read_delay(offset),
            FieldRef::EqType(value) => *value = reader.read_mapped(offset),
            FieldRef::EqDyn(value) => *value = reader.read_mapped(offset),
            FieldRef::Text(value) => *value = reader.read_cstring(offset),
        }
    }
}

pub fn write_all(writer: &mut FieldWriter, fields: Vec<Field<'_>>) {
    for field in fields {
        let offset = field.offset;
        match field.value {
            FieldRef::Bool(value) => writer.write_bool(offset, *value),
            FieldRef::Int32(value) => writer.write_int32(offset, *value),
            FieldRef::Scaled { value, divisor } => writer.write_scaled(offset, *value, divisor),
            FieldRef::Delay(value) => writer.write_delay(offset, *value),
            FieldRef::EqType(value) => writer.write_mapped(offset, *value),
            FieldRef::EqDyn(value) => writer.write_mapped(offset, *value),
            FieldRef::Text(value) => writer.write_cstring(offset, value),
        }
    }
}

/// Render fields as name/value pairs sorted by offset.
pub fn describe(fields: Vec<Field<'_>>) -> Vec<FieldEntry> {
    let mut entries: Vec<FieldEntry> = fields
        .into_iter()
        .map(|field| FieldEntry {
            value: render(&field.value),
            name: field.name.into_owned(),
            offset: field.offset,
        })
        .collect();
    entries.sort_by_key(|entry| entry.offset);
    entries
}

fn render(value: &FieldRef<'_>) -> String {
    match value {
        FieldRef::Bool(value) => value.to_string(),
        FieldRef::Int32(value) => value.to_string(),
        FieldRef::Scaled { value, divisor } => {
            let precision = (*divisor).max(1).ilog10() as usize;
            format!("{:.*}", precision, value)
        }
        FieldRef::Delay(value) => format!("{value} ms"),
        FieldRef::EqType(value) => value.to_string(),
        FieldRef::EqDyn(value) => value.to_string(),
        FieldRef::Text(value) => format!("{value:?}"),
    }
}
