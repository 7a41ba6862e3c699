//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build simulated tag memory and TLV/NDEF byte sequences
//! so tests across the crate and the tests/ directory share one layout.
#![allow(dead_code)]

use crate::constants::{CAPABILITY_SIZE_UNIT, TLV_NDEF_MESSAGE, TLV_TERMINATOR};
use crate::transport::MockTag;

/// GET_VERSION response of an NTAG213.
pub const NTAG213_VERSION: [u8; 8] = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x0F, 0x03];

/// GET_VERSION response of an NTAG215.
pub const NTAG215_VERSION: [u8; 8] = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x11, 0x03];

/// GET_VERSION response of an NTAG216.
pub const NTAG216_VERSION: [u8; 8] = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x13, 0x03];

/// Capability size byte of each variant (user memory / 8).
pub const NTAG213_CC_SIZE: u8 = 0x12;
/// NTAG215 capability size byte
pub const NTAG215_CC_SIZE: u8 = 0x3E;
/// NTAG216 capability size byte
pub const NTAG216_CC_SIZE: u8 = 0x6D;

/// Build a full page array: UID/lock pages 0..3, capability container on
/// page 3 announcing `size_byte`, then `data_area` from page 4, zero padded
/// to the announced size plus the trailing configuration pages.
#[doc(hidden)]
pub fn ntag_memory(size_byte: u8, data_area: &[u8]) -> Vec<u8> {
    let mut memory = vec![0x04, 0x12, 0x34, 0xBA, 0x56, 0x78, 0x9A, 0xBC, 0xEE, 0x48, 0x00, 0x00];
    memory.extend_from_slice(&[0xE1, 0x10, size_byte, 0x00]);
    let area = (size_byte as usize * CAPABILITY_SIZE_UNIT).max(data_area.len());
    let mut data = data_area.to_vec();
    data.resize(area, 0x00);
    memory.extend_from_slice(&data);
    // dynamic lock + configuration pages
    memory.extend_from_slice(&[0u8; 20]);
    memory
}

/// Encode payloads as NDEF message TLVs followed by a TERMINATOR.
#[doc(hidden)]
pub fn encode_message_tlvs(blocks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for b in blocks {
        out.push(TLV_NDEF_MESSAGE);
        out.push(b.len() as u8);
        out.extend_from_slice(b);
    }
    out.push(TLV_TERMINATOR);
    out
}

/// Single short NDEF record message (MB|ME|SR) with a well-known Text
/// payload.
#[doc(hidden)]
pub fn ndef_text_message(language: &str, text: &str) -> Vec<u8> {
    let mut payload = vec![language.len() as u8];
    payload.extend_from_slice(language.as_bytes());
    payload.extend_from_slice(text.as_bytes());

    let mut out = vec![0xD1, 0x01, payload.len() as u8, b'T'];
    out.extend_from_slice(&payload);
    out
}

/// Single short NDEF record message with a well-known URI payload.
#[doc(hidden)]
pub fn ndef_uri_message(prefix_code: u8, rest: &str) -> Vec<u8> {
    let mut out = vec![0xD1, 0x01, (rest.len() + 1) as u8, b'U', prefix_code];
    out.extend_from_slice(rest.as_bytes());
    out
}

/// Simulated NTAG213 holding `ndef` in a single message TLV.
#[doc(hidden)]
pub fn ntag213_with_ndef(ndef: &[u8]) -> MockTag {
    let area = encode_message_tlvs(&[ndef.to_vec()]);
    MockTag::new(NTAG213_VERSION, ntag_memory(NTAG213_CC_SIZE, &area))
}
