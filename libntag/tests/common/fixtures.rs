// fixtures.rs: provides commonly used version blocks, images and frames

use libntag::test_support::{encode_message_tlvs, ndef_text_message, ndef_uri_message};

/// Version block from the hex form printed by reader tools.
pub fn version(hex_str: &str) -> [u8; 8] {
    let bytes = hex::decode(hex_str.replace(' ', "")).unwrap();
    let mut out = [0u8; 8];
    out.copy_from_slice(&bytes);
    out
}

pub fn supported_version() -> [u8; 8] {
    version("00 04 04 02 01 00 0F 03")
}

pub fn protocol_mismatch_version() -> [u8; 8] {
    version("00 04 04 02 01 00 0F 04")
}

/// Capability READ response announcing `size_byte`.
pub fn capability_quad(size_byte: u8) -> Vec<u8> {
    let mut q = vec![0xE1, 0x10, size_byte, 0x00];
    q.extend_from_slice(&[0x03, 0x00, 0xFE, 0x00]);
    q.extend_from_slice(&[0x00; 8]);
    q
}

pub fn get_version_frame() -> Vec<u8> {
    hex::decode("ffef00000160").unwrap()
}

pub fn read_frame(page: u8) -> Vec<u8> {
    let mut f = hex::decode("ffef00000230").unwrap();
    f.push(page);
    f
}

/// Data area holding a text record and a URI record in two message TLVs,
/// separated by NULL padding and preceded by a lock control TLV.
pub fn mixed_data_area() -> Vec<u8> {
    let mut area = vec![0x01, 0x03, 0xA0, 0x0C, 0x34];
    area.extend_from_slice(&[0x00, 0x00]);
    let tlvs = encode_message_tlvs(&[
        ndef_text_message("en", "libntag"),
        ndef_uri_message(0x04, "example.org"),
    ]);
    area.extend_from_slice(&tlvs);
    area
}
