#[path = "../common/mod.rs"]
mod common;

use libntag::protocol::{Command, Response};
use libntag::types::{CapabilityDescriptor, ProductFamily, StorageSize};
use libntag::{Error, Unsupported};

#[test]
fn version_response_decodes_to_version_variant() {
    let raw = common::fixtures::supported_version();
    match Response::decode(&Command::GetVersion, &raw).unwrap() {
        Response::Version { version } => {
            assert_eq!(version.family, ProductFamily::Ntag21x);
            assert_eq!(version.storage, StorageSize::Ntag213);
            assert_eq!(version.to_bytes(), raw);
        }
        other => panic!("expected version response, got {:?}", other),
    }
}

#[test]
fn protocol_mismatch_is_unsupported() {
    let raw = common::fixtures::protocol_mismatch_version();
    match Response::decode(&Command::GetVersion, &raw) {
        Err(Error::UnsupportedTag(Unsupported::ProtocolMismatch { actual: 0x04, .. })) => {}
        other => panic!("expected protocol mismatch, got {:?}", other),
    }
}

#[test]
fn capability_response_size_byte() {
    let raw = common::fixtures::capability_quad(common::NTAG216_CC_SIZE);
    match Response::decode(&Command::Read { page: 3 }, &raw).unwrap() {
        Response::Read { page, quad } => {
            assert_eq!(page, 3);
            let cc = CapabilityDescriptor::from_quad(&quad);
            assert_eq!(cc.total_bytes(), 872);
            assert_eq!(cc.total_quads(), 54);
        }
        other => panic!("expected read response, got {:?}", other),
    }
}
