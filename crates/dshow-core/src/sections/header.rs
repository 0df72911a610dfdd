use super::{Section, SectionKind};
use crate::field::Field;

const SIZE: usize = 0x0c;
const FORMAT_VERSION: usize = 0x00;
const CHANNEL_COUNT: usize = 0x04;
const STEREO: usize = 0x08;

/// The `Header` blob inside the body.
///
/// Not to be confused with the container header, which carries the file
/// version and comment as stream tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderSection {
    pub format_version: i32,
    pub channel_count: i32,
    pub stereo: bool,
}

impl Section for HeaderSection {
    const KIND: SectionKind = SectionKind::Header;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::int32("Format Version", FORMAT_VERSION, &mut self.format_version),
            Field::int32("Channel Count", CHANNEL_COUNT, &mut self.channel_count),
            Field::bool("Stereo", STEREO, &mut self.stereo),
        ]
    }
}
