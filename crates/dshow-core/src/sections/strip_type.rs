use super::{Section, SectionKind};
use crate::field::Field;

const SIZE: usize = 0x04;
const STRIP_TYPE: usize = 0x00;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripType {
    pub strip_type: i32,
}

impl Section for StripType {
    const KIND: SectionKind = SectionKind::StripType;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![Field::int32("Strip Type", STRIP_TYPE, &mut self.strip_type)]
    }
}

#[cfg(test)]
mod tests {
    use super::StripType;
    use crate::sections::testing::assert_each_field_round_trips;

    #[test]
    fn each_field_round_trips() {
        assert_each_field_round_trips::<StripType>();
    }
}
