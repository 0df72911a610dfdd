use super::{Section, SectionKind};
use crate::field::Field;

const SIZE: usize = 0x08;
/// One stereo-link flag per aux pair, starting with Aux 1-2.
const STEREO_LINK_BASE: usize = 0x00;
const PANS_FOLLOW_MAIN: usize = 0x06;
const POST_MUTE: usize = 0x07;

const STEREO_LINK_NAMES: [&str; 6] = [
    "Aux 1-2 Stereo",
    "Aux 3-4 Stereo",
    "Aux 5-6 Stereo",
    "Aux 7-8 Stereo",
    "Aux 9-10 Stereo",
    "Aux 11-12 Stereo",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxBussesOptions {
    pub stereo_links: [bool; 6],
    pub pans_follow_main: bool,
    pub post_mute: bool,
}

impl Section for AuxBussesOptions {
    const KIND: SectionKind = SectionKind::AuxBussesOptions;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        let mut fields: Vec<Field<'_>> = self
            .stereo_links
            .iter_mut()
            .zip(STEREO_LINK_NAMES)
            .enumerate()
            .map(|(index, (linked, name))| Field::bool(name, STEREO_LINK_BASE + index, linked))
            .collect();
        fields.push(Field::bool(
            "Aux Pans Follow Main",
            PANS_FOLLOW_MAIN,
            &mut self.pans_follow_main,
        ));
        fields.push(Field::bool("Aux Post Mute", POST_MUTE, &mut self.post_mute));
        fields
    }
}
