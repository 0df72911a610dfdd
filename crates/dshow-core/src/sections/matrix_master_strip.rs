use super::{Section, SectionKind};
use crate::field::Field;

const SIZE: usize = 0x0c;
const MATRIX_LEVEL: usize = 0x00;
const MATRIX_MUTE: usize = 0x04;
const MATRIX_PAN: usize = 0x08;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixMasterStrip {
    pub matrix_level: f32,
    pub matrix_mute: bool,
    pub matrix_pan: f32,
}

impl Section for MatrixMasterStrip {
    const KIND: SectionKind = SectionKind::MatrixMasterStrip;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::tenths("Matrix Level", MATRIX_LEVEL, &mut self.matrix_level),
            Field::bool("Matrix Mute", MATRIX_MUTE, &mut self.matrix_mute),
            Field::tenths("Matrix Pan", MATRIX_PAN, &mut self.matrix_pan),
        ]
    }
}
