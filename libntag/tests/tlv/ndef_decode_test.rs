#[path = "../common/mod.rs"]
mod common;

use libntag::message::{NdefError, decode_records};
use libntag::{NdefCodec, PayloadCodec, Tnf};

#[test]
fn text_then_uri_messages() {
    let mut stream = common::ndef_text_message("en", "hi");
    stream.extend(common::ndef_uri_message(0x05, "+123"));

    let records = NdefCodec.decode(&stream).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].tnf, Tnf::WellKnown);
    assert_eq!(records[1].uri().as_deref(), Some("tel:+123"));
}

#[test]
fn chunked_record_is_reassembled() {
    let stream = [
        0xB2, 0x0A, 0x03, b't', b'e', b'x', b't', b'/', b'p', b'l', b'a', b'i', b'n', b'a', b'b',
        b'c', // MB|CF|SR, media type
        0x36, 0x00, 0x02, b'd', b'e', // CF|SR, unchanged
        0x56, 0x00, 0x01, b'f', // ME|SR, unchanged
    ];
    let records = decode_records(&stream).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tnf, Tnf::Media);
    assert_eq!(records[0].record_type, b"text/plain");
    assert_eq!(records[0].payload, b"abcdef");
}

#[test]
fn record_running_past_stream_end() {
    let mut stream = common::ndef_text_message("en", "hello");
    stream.truncate(stream.len() - 2);
    assert!(matches!(
        decode_records(&stream),
        Err(NdefError::Truncated { .. })
    ));
}
