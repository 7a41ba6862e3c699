#[path = "../common/mod.rs"]
mod common;

use libntag::transport::Transport;
use libntag::transport::mock::{MockTag, MockTransport};

#[test]
fn mock_transport_transmit_records_frames() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x01]);
    let r = m.transmit(&common::fixtures::get_version_frame()).unwrap();
    assert_eq!(r, vec![0x01]);
    assert_eq!(m.sent, vec![common::fixtures::get_version_frame()]);
}

#[test]
fn mock_tag_serves_capability_page() {
    let memory = common::ntag_memory(common::NTAG215_CC_SIZE, &[]);
    let mut tag = MockTag::new(common::NTAG215_VERSION, memory);
    let quad = tag.transmit(&common::fixtures::read_frame(0x03)).unwrap();
    assert_eq!(&quad[..4], &[0xE1, 0x10, 0x3E, 0x00]);
}
