use super::{Section, SectionKind};
use crate::field::Field;

const SIZE: usize = 0x08;
const GROUP_PRE_MUTE: usize = 0x00;
const GROUP_FOLLOW_PAN: usize = 0x01;
const SEND_LEVEL_MODE: usize = 0x04;

/// Group send options from the extended preset variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxBussesOptions2 {
    pub group_sends_pre_mute: bool,
    pub group_sends_follow_pan: bool,
    pub send_level_mode: i32,
}

impl Section for AuxBussesOptions2 {
    const KIND: SectionKind = SectionKind::AuxBussesOptions2;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::bool(
                "Group Sends Pre Mute",
                GROUP_PRE_MUTE,
                &mut self.group_sends_pre_mute,
            ),
            Field::bool(
                "Group Sends Follow Pan",
                GROUP_FOLLOW_PAN,
                &mut self.group_sends_follow_pan,
            ),
            Field::int32("Send Level Mode", SEND_LEVEL_MODE, &mut self.send_level_mode),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::AuxBussesOptions2;
    use crate::sections::testing::{assert_each_field_round_trips, assert_fields_fit};

    #[test]
    fn each_field_round_trips() {
        assert_each_field_round_trips::<AuxBussesOptions2>();
    }

    #[test]
    fn fields_fit() {
        assert_fields_fit::<AuxBussesOptions2>();
    }
}
