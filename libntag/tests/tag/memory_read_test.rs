#[path = "../common/mod.rs"]
mod common;

use libntag::transport::mock::{MockTag, MockTransport};
use libntag::{Error, read_all_memory};

#[test]
fn ntag215_reads_announced_quads_in_order() {
    let memory = common::ntag_memory(common::NTAG215_CC_SIZE, &[0xAB; 16]);
    let mut tag = MockTag::new(common::NTAG215_VERSION, memory);

    let image = read_all_memory(&mut tag).unwrap();

    // 0x3E / 2 = 31 quads after the capability read
    let expected: Vec<u8> = std::iter::once(3).chain((1..=31).map(|i| i * 4)).collect();
    assert_eq!(tag.read_pages(), expected);
    assert_eq!(image.len(), 31 * 16);
    assert_eq!(&image.as_bytes()[..16], &[0xAB; 16]);
}

#[test]
fn image_bytes_follow_page_four() {
    let area: Vec<u8> = (0..=255u8).collect();
    let memory = common::ntag_memory(0x20, &area);
    let mut tag = MockTag::new(common::NTAG215_VERSION, memory.clone());

    let image = read_all_memory(&mut tag).unwrap();
    assert_eq!(image.len(), 16 * 16);
    assert_eq!(image.as_bytes(), &memory[16..16 + 256]);
}

#[test]
fn zero_capability_reads_nothing_more() {
    let mut tag = MockTag::new(common::NTAG213_VERSION, common::ntag_memory(0x00, &[]));
    let image = read_all_memory(&mut tag).unwrap();
    assert!(image.is_empty());
    assert_eq!(tag.read_pages(), vec![3]);
}

#[test]
fn removal_mid_read_reports_progress() {
    let memory = common::ntag_memory(common::NTAG213_CC_SIZE, &[]);
    // command 0 is the capability read, then two quads succeed
    let mut tag = MockTag::new(common::NTAG213_VERSION, memory).fail_from(3);

    let err = read_all_memory(&mut tag).unwrap_err();
    assert_eq!(err.quads_read(), Some(2));
    match err {
        Error::Read { source, .. } => assert!(matches!(*source, Error::Transport(_))),
        other => panic!("expected Read error, got {:?}", other),
    }
}

#[test]
fn short_quad_response_aborts() {
    let mut reader = MockTransport::new();
    // two quads announced, the second answer is short
    reader.push_response(common::fixtures::capability_quad(0x04));
    reader.push_response(vec![0u8; 16]);
    reader.push_response(vec![0u8; 4]);

    let err = read_all_memory(&mut reader).unwrap_err();
    assert_eq!(err.quads_read(), Some(1));
    match err {
        Error::Read { source, .. } => assert!(matches!(
            *source,
            Error::InvalidLength {
                expected: 16,
                actual: 4
            }
        )),
        other => panic!("expected Read error, got {:?}", other),
    }
}

#[test]
fn oversized_capability_is_rejected_before_reading() {
    let mut reader = MockTransport::new();
    reader.push_response(common::fixtures::capability_quad(0xFF));

    match read_all_memory(&mut reader) {
        Err(Error::CapacityOutOfRange { size_byte: 0xFF, .. }) => {}
        other => panic!("expected CapacityOutOfRange, got {:?}", other),
    }
    assert_eq!(reader.sent.len(), 1);
}
