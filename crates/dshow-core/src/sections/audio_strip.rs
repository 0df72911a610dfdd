use super::{Section, SectionKind};
use crate::field::Field;

const SIZE: usize = 0x1c;
const PHASE_INVERT: usize = 0x00;
const MUTE: usize = 0x01;
const SOLO_SAFE: usize = 0x02;
const DELAY_IN: usize = 0x03;
const DELAY: usize = 0x04;
const FADER: usize = 0x08;
const PAN: usize = 0x0c;
const HPF_IN: usize = 0x10;
const HPF_FREQ: usize = 0x14;
const DIRECT_OUT_LEVEL: usize = 0x18;

/// Post-input processing shared by every strip type: polarity, delay,
/// fader and pan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioStrip {
    pub phase_invert: bool,
    pub mute: bool,
    pub solo_safe: bool,
    pub delay_in: bool,
    /// Milliseconds; stored as samples at 96 kHz.
    pub delay: f32,
    /// dB.
    pub fader: f32,
    pub pan: f32,
    pub hpf_in: bool,
    /// Hz.
    pub hpf_freq: i32,
    pub direct_out_level: f32,
}

impl Section for AudioStrip {
    const KIND: SectionKind = SectionKind::AudioStrip;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::bool("Phase Invert", PHASE_INVERT, &mut self.phase_invert),
            Field::bool("Mute", MUTE, &mut self.mute),
            Field::bool("Solo Safe", SOLO_SAFE, &mut self.solo_safe),
            Field::bool("Delay In", DELAY_IN, &mut self.delay_in),
            Field::delay("Delay", DELAY, &mut self.delay),
            Field::tenths("Fader", FADER, &mut self.fader),
            Field::tenths("Pan", PAN, &mut self.pan),
            Field::bool("HPF In", HPF_IN, &mut self.hpf_in),
            Field::int32("HPF Freq", HPF_FREQ, &mut self.hpf_freq),
            Field::tenths("Direct Out Level", DIRECT_OUT_LEVEL, &mut self.direct_out_level),
        ]
    }
}
