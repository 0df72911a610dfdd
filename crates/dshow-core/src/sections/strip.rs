use super::{Section, SectionKind};
use crate::field::{self, Field};

const SELECTED: usize = 0x00;
const COLOR: usize = 0x04;
const INPUT_NUMBER: usize = 0x08;
/// The channel name starts here and runs to its terminator; the record
/// ends right after it.
const CHANNEL_NAME: usize = 0x0c;

/// Strip identity: selection, color, input number and channel name.
///
/// The name is single-byte text. Encoding stops at an embedded NUL and
/// writes chars above U+00FF as `?`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Strip {
    pub selected: bool,
    pub color: i32,
    pub input_number: i32,
    pub channel_name: String,
}

impl Section for Strip {
    const KIND: SectionKind = SectionKind::Strip;

    fn encoded_len(&self) -> usize {
        CHANNEL_NAME + field::cstring_len(&self.channel_name)
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::bool("Selected", SELECTED, &mut self.selected),
            Field::int32("Color", COLOR, &mut self.color),
            Field::int32("Input Number", INPUT_NUMBER, &mut self.input_number),
            Field::text("Channel Name", CHANNEL_NAME, &mut self.channel_name),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{CHANNEL_NAME, Strip};
    use crate::field::FieldError;
    use crate::sections::Section;
    use crate::sections::testing::{
        assert_each_field_round_trips, assert_fields_fit, assert_round_trip,
    };

    fn named(name: &str) -> Strip {
        Strip {
            channel_name: name.to_string(),
            ..Strip::default()
        }
    }

    #[test]
    fn each_field_round_trips() {
        assert_each_field_round_trips::<Strip>();
    }

    #[test]
    fn fields_fit() {
        assert_fields_fit::<Strip>();
    }

    #[test]
    fn size_follows_channel_name() {
        assert_eq!(Strip::default().encode().len(), CHANNEL_NAME + 1);
        assert_eq!(named("Kick In").encode().len(), CHANNEL_NAME + 8);
    }

    #[test]
    fn name_is_null_terminated() {
        let bytes = named("Vox").encode();
        assert_eq!(&bytes[CHANNEL_NAME..], b"Vox\0");
    }

    #[test]
    fn consumed_length_covers_name_only() {
        let mut blob = named("Gtr").encode();
        blob.extend_from_slice(&[0xaa, 0xbb]);
        let mut strip = Strip::default();
        assert_eq!(strip.decode(&blob).unwrap(), CHANNEL_NAME + 4);
        assert_eq!(strip.channel_name, "Gtr");
    }

    #[test]
    fn renaming_after_decode_only_grows_the_name() {
        let mut strip = Strip::default();
        strip.decode(&named("Bass").encode()).unwrap();
        strip.color = 5;
        strip.channel_name = "Bass DI Long Name".to_string();

        let bytes = strip.encode();
        assert_eq!(bytes.len(), CHANNEL_NAME + 18);
        assert_eq!(&bytes[0x04..0x08], &5i32.to_le_bytes());
        assert_round_trip(&strip);
    }

    #[test]
    fn non_ascii_name_keeps_its_byte_length() {
        let mut blob = vec![0u8; CHANNEL_NAME];
        blob.extend_from_slice(&[b'B', 0xe4, b's', b's', 0]);

        let mut strip = Strip::default();
        assert_eq!(strip.decode(&blob).unwrap(), blob.len());
        assert_eq!(strip.channel_name, "B\u{e4}ss");
        assert_eq!(strip.encode(), blob);
    }

    #[test]
    fn embedded_nul_ends_the_name() {
        let strip = named("Kick\0Snare");
        let bytes = strip.encode();
        assert_eq!(bytes.len(), strip.encoded_len());
        assert_eq!(&bytes[CHANNEL_NAME..], b"Kick\0");

        let mut decoded = Strip::default();
        assert_eq!(decoded.decode(&bytes).unwrap(), bytes.len());
        assert_eq!(decoded.channel_name, "Kick");
    }

    #[test]
    fn blob_without_name_terminator_is_rejected() {
        let mut blob = named("Tom").encode();
        blob.pop();
        let mut strip = Strip::default();
        assert_eq!(
            strip.decode(&blob).unwrap_err(),
            FieldError::UnterminatedString {
                offset: CHANNEL_NAME
            }
        );
    }

    #[test]
    fn blob_shorter_than_fixed_fields_is_rejected() {
        let mut strip = Strip::default();
        assert!(matches!(
            strip.decode(&[0u8; 0x0a]),
            Err(FieldError::OutOfRange { offset: 0x08, .. })
        ));
    }
}
