use super::{Section, SectionKind};
use crate::field::Field;

const SIZE: usize = 0x0c;
const MASTER_FADER: usize = 0x00;
const MASTER_MUTE: usize = 0x04;
const MASTER_PAN: usize = 0x08;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioMasterStrip {
    pub master_fader: f32,
    pub master_mute: bool,
    pub master_pan: f32,
}

impl Section for AudioMasterStrip {
    const KIND: SectionKind = SectionKind::AudioMasterStrip;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::tenths("Master Fader", MASTER_FADER, &mut self.master_fader),
            Field::bool("Master Mute", MASTER_MUTE, &mut self.master_mute),
            Field::tenths("Master Pan", MASTER_PAN, &mut self.master_pan),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::AudioMasterStrip;
    use crate::sections::testing::{assert_each_field_round_trips, assert_fields_fit};

    #[test]
    fn each_field_round_trips() {
        assert_each_field_round_trips::<AudioMasterStrip>();
    }

    #[test]
    fn fields_fit() {
        assert_fields_fit::<AudioMasterStrip>();
    }
}
