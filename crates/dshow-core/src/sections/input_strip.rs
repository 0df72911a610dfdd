use super::{Section, SectionKind};
use crate::field::{EqDyn, EqType, Field};

const SIZE: usize = 0xe8;

const INPUT_PATCH: usize = 0x00;
const PHANTOM: usize = 0x04;
const PAD: usize = 0x05;
const GAIN: usize = 0x08;
const EQ_IN: usize = 0x0c;
const EQ_DYN_ORDER: usize = 0x0d;

const EQ_BAND_BASE: usize = 0x10;
const EQ_BAND_STRIDE: usize = 0x10;
const EQ_BAND_IN: usize = 0x00;
const EQ_BAND_TYPE: usize = 0x01;
const EQ_BAND_GAIN: usize = 0x04;
const EQ_BAND_FREQ: usize = 0x08;
const EQ_BAND_Q: usize = 0x0c;

const BUS_ASSIGN_BASE: usize = 0x50;

const AUX_BASE: usize = 0x58;
const AUX_STRIDE: usize = 0x0c;
const AUX_IN: usize = 0x00;
const AUX_PRE: usize = 0x01;
const AUX_LEVEL: usize = 0x04;
const AUX_PAN: usize = 0x08;

pub const EQ_BANDS: usize = 4;
pub const BUSSES: usize = 8;
pub const AUX_SENDS: usize = 12;
/// Only the first six aux sends carry a pan position.
pub const AUX_PANS: usize = 6;

/// One parametric EQ band.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EqBand {
    pub enabled: bool,
    pub kind: EqType,
    /// dB.
    pub gain: f32,
    /// Hz.
    pub freq: i32,
    pub q: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxSend {
    pub enabled: bool,
    pub pre_fader: bool,
    /// dB.
    pub level: f32,
}

/// Input stage, EQ, bus assignment and aux sends of a channel.
///
/// Fields are laid out as fixed blocks: the input stage, four EQ bands of
/// 16 bytes each, eight bus-assign flags, then twelve 12-byte aux send
/// slots. Pan is stored in the last word of the first six aux slots.
#[derive(Debug, Clone, PartialEq)]
pub struct InputStrip {
    pub input_patch: i32,
    pub phantom: bool,
    pub pad: bool,
    /// dB.
    pub gain: f32,
    pub eq_in: bool,
    pub eq_dyn_order: EqDyn,
    pub eq_bands: [EqBand; EQ_BANDS],
    pub bus_assign: [bool; BUSSES],
    pub aux_sends: [AuxSend; AUX_SENDS],
    pub aux_pans: [f32; AUX_PANS],
}

impl Default for InputStrip {
    fn default() -> Self {
        let mut eq_bands: [EqBand; EQ_BANDS] = Default::default();
        // Low and high bands start as shelves, the mids as bells.
        eq_bands[1].kind = EqType::Curve;
        eq_bands[2].kind = EqType::Curve;
        Self {
            input_patch: 0,
            phantom: false,
            pad: false,
            gain: 0.0,
            eq_in: false,
            eq_dyn_order: EqDyn::default(),
            eq_bands,
            bus_assign: [false; BUSSES],
            aux_sends: Default::default(),
            aux_pans: [0.0; AUX_PANS],
        }
    }
}

impl Section for InputStrip {
    const KIND: SectionKind = SectionKind::InputStrip;

    fn encoded_len(&self) -> usize {
        SIZE
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::int32("Input Patch", INPUT_PATCH, &mut self.input_patch),
            Field::bool("Phantom", PHANTOM, &mut self.phantom),
            Field::bool("Pad", PAD, &mut self.pad),
            Field::tenths("Gain", GAIN, &mut self.gain),
            Field::bool("EQ In", EQ_IN, &mut self.eq_in),
            Field::eq_dyn("EQ Dyn Order", EQ_DYN_ORDER, &mut self.eq_dyn_order),
        ];

        for (index, band) in self.eq_bands.iter_mut().enumerate() {
            let base = EQ_BAND_BASE + index * EQ_BAND_STRIDE;
            let n = index + 1;
            fields.push(Field::bool(
                format!("EQ Band {n} In"),
                base + EQ_BAND_IN,
                &mut band.enabled,
            ));
            fields.push(Field::eq_type(
                format!("EQ Band {n} Type"),
                base + EQ_BAND_TYPE,
                &mut band.kind,
            ));
            fields.push(Field::tenths(
                format!("EQ Band {n} Gain"),
                base + EQ_BAND_GAIN,
                &mut band.gain,
            ));
            fields.push(Field::int32(
                format!("EQ Band {n} Freq"),
                base + EQ_BAND_FREQ,
                &mut band.freq,
            ));
            fields.push(Field::hundredths(
                format!("EQ Band {n} Q"),
                base + EQ_BAND_Q,
                &mut band.q,
            ));
        }

        for (index, assigned) in self.bus_assign.iter_mut().enumerate() {
            fields.push(Field::bool(
                format!("Bus {} Assign", index + 1),
                BUS_ASSIGN_BASE + index,
                assigned,
            ));
        }

        for (index, send) in self.aux_sends.iter_mut().enumerate() {
            let base = AUX_BASE + index * AUX_STRIDE;
            let n = index + 1;
            fields.push(Field::bool(
                format!("Aux {n} In"),
                base + AUX_IN,
                &mut send.enabled,
            ));
            fields.push(Field::bool(
                format!("Aux {n} Pre"),
                base + AUX_PRE,
                &mut send.pre_fader,
            ));
            fields.push(Field::tenths(
                format!("Aux {n} Level"),
                base + AUX_LEVEL,
                &mut send.level,
            ));
        }

        for (index, pan) in self.aux_pans.iter_mut().enumerate() {
            fields.push(Field::tenths(
                format!("Aux {} Pan", index + 1),
                AUX_BASE + index * AUX_STRIDE + AUX_PAN,
                pan,
            ));
        }

        fields
    }
}
