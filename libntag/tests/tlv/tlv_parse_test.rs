#[path = "../common/mod.rs"]
mod common;

use libntag::tlv::{self, TlvError, TlvReader, TlvRecord, TlvTag};
use proptest::prelude::*;

#[test]
fn other_tlvs_are_skipped_by_length() {
    let image = [
        0x01, 0x03, 0xA0, 0x0C, 0x34, // lock control
        0x02, 0x03, 0x00, 0x00, 0x00, // memory control
        0xFD, 0x01, 0x03, // proprietary, value looks like a message tag
        0x03, 0x02, 0xAA, 0xBB, 0xFE,
    ];
    assert_eq!(tlv::parse(&image).unwrap(), vec![vec![0xAA, 0xBB]]);
}

#[test]
fn bytes_after_terminator_are_ignored() {
    let image = [0x03, 0x01, 0x11, 0xFE, 0x03, 0xFF, 0x00];
    assert_eq!(tlv::parse(&image).unwrap(), vec![vec![0x11]]);
}

#[test]
fn empty_image_is_empty_container() {
    assert_eq!(tlv::parse(&[]).unwrap(), Vec::<Vec<u8>>::new());
}

#[test]
fn missing_length_is_truncated() {
    assert_eq!(
        tlv::parse(&[0x00, 0x03]),
        Err(TlvError::Truncated { offset: 2 })
    );
}

#[test]
fn overlong_value_is_rejected() {
    assert!(matches!(
        tlv::parse(&[0x03, 0x10, 0x01, 0x02]),
        Err(TlvError::LengthOverrun {
            length: 16,
            available: 2,
            ..
        })
    ));
}

#[test]
fn reader_walks_mixed_area() {
    let area = common::fixtures::mixed_data_area();
    let records: Vec<TlvRecord> = TlvReader::new(&area).collect::<Result<_, _>>().unwrap();

    assert!(matches!(records[0], TlvRecord::Other { tag: TlvTag::LockControl, .. }));
    assert!(matches!(records[1], TlvRecord::Null));
    assert!(matches!(records[2], TlvRecord::Null));
    assert!(matches!(records[3], TlvRecord::Message(_)));
    assert!(matches!(records[4], TlvRecord::Message(_)));
    assert!(matches!(records.last(), Some(TlvRecord::Terminator)));
    assert_eq!(records.len(), 6);
}

fn message_block() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=255)
}

proptest! {
    #[test]
    fn message_blocks_roundtrip(blocks in prop::collection::vec(message_block(), 0..4)) {
        let image = common::encode_message_tlvs(&blocks);
        prop_assert_eq!(tlv::parse(&image).unwrap(), blocks);
    }

    #[test]
    fn null_padding_changes_nothing(
        blocks in prop::collection::vec(message_block(), 1..3),
        pad in 0usize..8,
    ) {
        let mut image = Vec::new();
        for b in &blocks {
            image.extend(std::iter::repeat_n(0x00, pad));
            image.push(0x03);
            image.push(b.len() as u8);
            image.extend_from_slice(b);
        }
        image.extend(std::iter::repeat_n(0x00, pad));
        image.push(0xFE);
        prop_assert_eq!(tlv::parse(&image).unwrap(), blocks);
    }

    #[test]
    fn arbitrary_images_never_panic(image in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = tlv::parse(&image);
    }
}
