#[path = "../common/mod.rs"]
mod common;

use libntag::Error;
use libntag::transport::Transport;
use libntag::transport::mock::{MockTag, MockTransport};

#[test]
fn exhausted_mock_times_out() {
    let mut m = MockTransport::new();
    assert!(matches!(m.transmit(&[0x00]), Err(Error::Timeout)));
}

#[test]
fn mock_tag_rejects_unknown_command() {
    let mut tag = MockTag::new(common::NTAG213_VERSION, Vec::new());
    // WRITE (0xA2) is not served by the simulator
    let frame = [0xFF, 0xEF, 0x00, 0x00, 0x06, 0xA2, 0x04, 0x00, 0x00, 0x00, 0x00];
    match tag.transmit(&frame) {
        Err(Error::Transport(msg)) => assert!(msg.contains("a2")),
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[test]
fn mock_tag_rejects_malformed_frame() {
    let mut tag = MockTag::new(common::NTAG213_VERSION, Vec::new());
    assert!(matches!(
        tag.transmit(&[0xFF, 0xEF, 0x00]),
        Err(Error::InvalidLength { .. })
    ));
}
