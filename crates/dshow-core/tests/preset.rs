use dshow_core::sections::{AudioStrip, HeaderSection, InputStrip, MicLineStrips, Strip, StripType};
use dshow_core::stream::TokenWriter;
use dshow_core::{DShowInputChannel, DecodeError, EqDyn, Header, MAGIC, Section, SectionKind};

/// Build an old-style preset: only the sections every console writes.
fn old_style_preset() -> Vec<u8> {
    let header = Header {
        version: 1,
        file_type: "D-Show Input Channel".to_string(),
        user_comment: "FOH kick".to_string(),
        ..Header::default()
    };
    let input_strip = InputStrip {
        phantom: true,
        gain: 35.0,
        eq_dyn_order: EqDyn::PostDyn,
        ..InputStrip::default()
    };
    let strip = Strip {
        channel_name: "Kick".to_string(),
        input_number: 1,
        ..Strip::default()
    };
    let mut mic = MicLineStrips::default();
    mic.decode(&[0u8; 0x40]).expect("blank mic/line blob");
    mic.hpf_in = true;
    mic.hpf_freq = 60;

    let sections: Vec<(&str, Vec<u8>)> = vec![
        ("AudioStrip", AudioStrip::default().encode()),
        ("Header", HeaderSection::default().encode()),
        ("InputStrip", input_strip.encode()),
        ("MicLineStrips", mic.encode()),
        ("Strip", strip.encode()),
        ("StripType", StripType { strip_type: 1 }.encode()),
    ];

    let mut writer = TokenWriter::new();
    writer.write_string(MAGIC);
    writer.write_raw(&header.encode());
    writer.write_token_count(sections.len() as i32);
    for (name, blob) in &sections {
        writer.write_string(name);
        writer.write_bytes(blob);
    }
    writer.into_inner()
}

#[test]
fn old_style_preset_decodes() {
    let preset = DShowInputChannel::decode(&old_style_preset()).expect("decode preset");

    assert_eq!(preset.header.user_comment, "FOH kick");
    assert!(preset.body.input_strip.phantom);
    assert_eq!(preset.body.input_strip.gain, 35.0);
    assert_eq!(preset.body.input_strip.eq_dyn_order, EqDyn::PostDyn);
    assert_eq!(preset.body.strip.channel_name, "Kick");
    assert_eq!(preset.body.mic_line_strips.hpf_freq, 60);
    assert_eq!(preset.body.strip_type.strip_type, 1);
    assert!(!preset.body.was_decoded(SectionKind::AudioMasterStrip));
    assert_eq!(preset.body.decoded_sections().len(), 6);
}

#[test]
fn reencoding_old_style_preset_adds_extended_sections() {
    let bytes = old_style_preset();
    let preset = DShowInputChannel::decode(&bytes).expect("decode preset");
    let reencoded = preset.encode();
    assert!(reencoded.len() > bytes.len());

    let again = DShowInputChannel::decode(&reencoded).expect("decode re-encoded");
    assert_eq!(again.body.decoded_sections(), SectionKind::ALL);
    for kind in SectionKind::ALL.into_iter().filter(|kind| kind.is_extended()) {
        assert!(!preset.body.was_decoded(kind));
        assert!(again.body.was_decoded(kind));
    }
    assert_eq!(again.body.input_strip, preset.body.input_strip);
    assert_eq!(again.body.strip, preset.body.strip);
    assert_eq!(again.body.mic_line_strips, preset.body.mic_line_strips);
    assert_eq!(again.body.mic_line_strips.encoded_len(), 0x40);
}

#[test]
fn full_round_trip_is_byte_stable() {
    let mut preset = DShowInputChannel::default();
    preset.header.user_comment = "Monitor world".to_string();
    preset.body.audio_strip.delay = 12.0;
    preset.body.audio_strip.pan = -25.0;
    preset.body.audio_master_strip.master_fader = -3.0;
    preset.body.aux_busses_options.stereo_links[0] = true;
    preset.body.aux_busses_options2.send_level_mode = 2;
    preset.body.input_strip.aux_sends[3].enabled = true;
    preset.body.input_strip.aux_sends[3].level = -8.5;
    preset.body.strip.channel_name = "Bass DI".to_string();

    let bytes = preset.encode();
    let decoded = DShowInputChannel::decode(&bytes).expect("decode preset");
    assert_eq!(decoded.encode(), bytes);
    assert_eq!(decoded.header, preset.header);
    assert_eq!(decoded.body.audio_strip, preset.body.audio_strip);
    assert_eq!(decoded.body.input_strip, preset.body.input_strip);
}

#[test]
fn every_truncation_is_an_error() {
    let bytes = old_style_preset();
    for len in 0..bytes.len() {
        let result = DShowInputChannel::decode(&bytes[..len]);
        assert!(result.is_err(), "prefix of {len} bytes decoded");
    }
}

#[test]
fn missing_final_pair_reports_count() {
    let bytes = DShowInputChannel::default().encode();
    // "StripType" name token plus its 4-byte blob token close the body.
    let last_pair = (1 + "StripType".len() + 1) + (1 + 4 + 4);

    let err = DShowInputChannel::decode(&bytes[..bytes.len() - last_pair]).unwrap_err();
    assert_eq!(err.to_string(), "Body: expected 11 tokens, found 10");
}

#[test]
fn unknown_section_error_is_not_skipped() {
    let mut writer = TokenWriter::new();
    writer.write_string(MAGIC);
    writer.write_raw(&Header::default().encode());
    writer.write_token_count(2);
    writer.write_string("StripType");
    writer.write_bytes(&StripType::default().encode());
    writer.write_string("DynamicsStrip");
    writer.write_bytes(&[0; 16]);

    let err = DShowInputChannel::decode(&writer.into_inner()).unwrap_err();
    match err.root_cause() {
        DecodeError::UnknownSection { name } => assert_eq!(name, "DynamicsStrip"),
        other => panic!("unexpected error: {other}"),
    }
}
