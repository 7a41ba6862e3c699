#[path = "../common/mod.rs"]
mod common;

use libntag::transport::mock::{MockTag, MockTransport};
use libntag::{ProductFamily, StorageSize, Unsupported, check_version};

#[test]
fn every_supported_variant_passes() {
    let cases = [
        (common::NTAG213_VERSION, StorageSize::Ntag213),
        (common::NTAG215_VERSION, StorageSize::Ntag215),
        (common::NTAG216_VERSION, StorageSize::Ntag216),
    ];
    for (raw, storage) in cases {
        let mut tag = MockTag::new(raw, Vec::new());
        let version = check_version(&mut tag).unwrap();
        assert_eq!(version.storage, storage);
        assert_eq!(version.family, ProductFamily::Ntag21x);
        assert_eq!(tag.sent, vec![common::fixtures::get_version_frame()]);
    }
}

#[test]
fn f_family_is_accepted() {
    let raw = common::fixtures::version("00 04 04 04 01 00 0F 03");
    let mut tag = MockTag::new(raw, Vec::new());
    let version = check_version(&mut tag).unwrap();
    assert_eq!(version.family, ProductFamily::Ntag21xF);
    assert_eq!(version.to_string(), "NTAG213 (NTAG21xF)");
}

#[test]
fn f_family_without_215_size_is_rejected() {
    let raw = common::fixtures::version("00 04 04 04 01 00 11 03");
    let mut tag = MockTag::new(raw, Vec::new());
    assert_eq!(check_version(&mut tag), Err(Unsupported::UnknownSubtype(0x11)));
}

#[test]
fn wrong_protocol_is_rejected() {
    let mut tag = MockTag::new(common::fixtures::protocol_mismatch_version(), Vec::new());
    assert_eq!(
        check_version(&mut tag),
        Err(Unsupported::ProtocolMismatch {
            expected: 0x03,
            actual: 0x04
        })
    );
}

#[test]
fn unknown_family_is_rejected() {
    // MIFARE Ultralight EV1
    let raw = common::fixtures::version("00 04 03 01 01 00 0B 03");
    let mut tag = MockTag::new(raw, Vec::new());
    assert!(matches!(
        check_version(&mut tag),
        Err(Unsupported::UnknownFamily(_))
    ));
}

#[test]
fn transport_failure_is_unsupported() {
    let mut reader = MockTransport::new();
    reader.push_failure("no card");
    match check_version(&mut reader) {
        Err(Unsupported::QueryFailed(msg)) => assert!(msg.contains("no card")),
        other => panic!("expected QueryFailed, got {:?}", other),
    }
}
