use super::{Section, SectionKind};
use crate::field::Field;

/// Size used when the record was never decoded.
pub const DEFAULT_LEN: usize = 0x65;

const INPUT_GAIN: usize = 0x00;
const PAD: usize = 0x04;
const PHANTOM: usize = 0x05;
const HPF_IN: usize = 0x06;
const LPF_IN: usize = 0x07;
const HPF_FREQ: usize = 0x08;
const LPF_FREQ: usize = 0x0c;
const DIGITAL_TRIM: usize = 0x10;

/// Mic/line preamp settings.
///
/// Consoles write this record with differing lengths, so it keeps the
/// length it was decoded from and encodes back to that length. Bytes past
/// the modeled fields are written as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MicLineStrips {
    pub input_gain: f32,
    pub pad: bool,
    pub phantom: bool,
    pub hpf_in: bool,
    pub lpf_in: bool,
    pub hpf_freq: i32,
    pub lpf_freq: i32,
    pub digital_trim: f32,
    len: usize,
}

impl Default for MicLineStrips {
    fn default() -> Self {
        Self {
            input_gain: 0.0,
            pad: false,
            phantom: false,
            hpf_in: false,
            lpf_in: false,
            hpf_freq: 0,
            lpf_freq: 0,
            digital_trim: 0.0,
            len: DEFAULT_LEN,
        }
    }
}

impl Section for MicLineStrips {
    const KIND: SectionKind = SectionKind::MicLineStrips;

    fn encoded_len(&self) -> usize {
        self.len
    }

    fn prepare_decode(&mut self, blob_len: usize) {
        self.len = blob_len;
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::tenths("Input Gain", INPUT_GAIN, &mut self.input_gain),
            Field::bool("Pad", PAD, &mut self.pad),
            Field::bool("Phantom", PHANTOM, &mut self.phantom),
            Field::bool("HPF In", HPF_IN, &mut self.hpf_in),
            Field::bool("LPF In", LPF_IN, &mut self.lpf_in),
            Field::int32("HPF Freq", HPF_FREQ, &mut self.hpf_freq),
            Field::int32("LPF Freq", LPF_FREQ, &mut self.lpf_freq),
            Field::tenths("Digital Trim", DIGITAL_TRIM, &mut self.digital_trim),
        ]
    }
}
