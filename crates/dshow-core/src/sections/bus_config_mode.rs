use super::{Section, SectionKind};
use crate::field::Field;

const SIZE: usize = 0x04;
const MODE: usize = 0x00;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusConfigMode {
    pub mode: i32,
}

impl Section for BusConfigMode {
    const KIND: SectionKind = SectionKind::BusConfigMode;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![Field::int32("Mode", MODE, &mut self.mode)]
    }
}

#[cfg(test)]
mod tests {
    use super::BusConfigMode;
    use crate::sections::Section;
    use crate::sections::testing::assert_each_field_round_trips;

    #[test]
    fn each_field_round_trips() {
        assert_each_field_round_trips::<BusConfigMode>();
    }

    #[test]
    fn longer_blob_reports_fixed_size() {
        let mut config = BusConfigMode::default();
        let consumed = config.decode(&[3, 0, 0, 0, 0xaa, 0xbb]).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(config.mode, 3);
    }
}
