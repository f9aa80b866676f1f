//! Byte-exact wire compatibility checks.
//!
//! The field-number table is a published contract: producers and consumers
//! already deployed against this schema rely on these exact tags and wire
//! types. Golden byte vectors here were derived by hand from the protobuf
//! encoding rules, so a regression in field numbering, wire type, or
//! packing shows up as a byte diff rather than a silent round-trip pass.

#![allow(missing_docs)]

use dec_proto::{Logits, Transcription, WireCodec};

#[test]
fn logits_golden_bytes() {
    let msg = Logits {
        shape: vec![2, 3],
        data: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    };

    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
        // field 1 (shape), wire type 2, packed varints [2, 3]
        0x0A, 0x02, 0x02, 0x03,
        // field 2 (data), wire type 2, 24 bytes of little-endian f32
        0x12, 0x18,
        0x00, 0x00, 0x80, 0x3F, // 1.0
        0x00, 0x00, 0x00, 0x40, // 2.0
        0x00, 0x00, 0x40, 0x40, // 3.0
        0x00, 0x00, 0x80, 0x40, // 4.0
        0x00, 0x00, 0xA0, 0x40, // 5.0
        0x00, 0x00, 0xC0, 0x40, // 6.0
    ];

    assert_eq!(msg.to_bytes(), expected);
    assert_eq!(Logits::from_bytes(&expected).unwrap(), msg);
}

#[test]
fn transcription_golden_bytes() {
    let msg = Transcription {
        greedy_trans: "cat".into(),
        beam_trans: "cat".into(),
        beam_decoded_offsets: vec![0, 4, 8],
    };

    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
        // field 1 (greedy_trans), wire type 2, "cat"
        0x0A, 0x03, b'c', b'a', b't',
        // field 2 (beam_trans), wire type 2, "cat"
        0x12, 0x03, b'c', b'a', b't',
        // field 3 (beam_decoded_offsets), wire type 2, packed varints
        0x1A, 0x03, 0x00, 0x04, 0x08,
    ];

    assert_eq!(msg.to_bytes(), expected);
    assert_eq!(Transcription::from_bytes(&expected).unwrap(), msg);
}

#[test]
fn unpacked_repeated_varints_still_decode() {
    // Packed is the default on the wire, but conformant decoders accept
    // the unpacked form too (one tagged varint per element).
    let bytes = [0x08, 0x02, 0x08, 0x03];
    let decoded = Logits::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.shape, vec![2, 3]);
    assert!(decoded.data.is_empty());
}

#[test]
fn unpacked_offsets_still_decode() {
    let bytes = [0x18, 0x00, 0x18, 0x04, 0x18, 0x08];
    let decoded = Transcription::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.beam_decoded_offsets, vec![0, 4, 8]);
    assert!(decoded.greedy_trans.is_empty());
    assert!(decoded.beam_trans.is_empty());
}

#[test]
fn fields_may_arrive_in_any_order() {
    // A producer is free to emit fields out of numeric order.
    let bytes = [
        0x1A, 0x03, 0x00, 0x04, 0x08, // beam_decoded_offsets first
        0x0A, 0x03, b'c', b'a', b't', // then greedy_trans
    ];
    let decoded = Transcription::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.greedy_trans, "cat");
    assert!(decoded.beam_trans.is_empty());
    assert_eq!(decoded.beam_decoded_offsets, vec![0, 4, 8]);
}
