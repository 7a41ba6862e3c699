// libntag/src/constants.rs
//! Common protocol constants used across the crate

/// Pseudo-APDU header used to pass native tag commands through the reader:
/// CLA=0xFF INS=0xEF P1=0x00 P2=0x00. The Lc byte follows.
pub const PSEUDO_APDU_HEADER: [u8; 4] = [0xFF, 0xEF, 0x00, 0x00];

/// Length of the full pseudo-APDU header including the Lc byte.
pub const PSEUDO_APDU_HEADER_LEN: usize = 5;

/// Maximum native command length that fits in the Lc byte.
pub const PSEUDO_APDU_MAX_PAYLOAD_LEN: usize = 255;

/// Native NTAG GET_VERSION opcode
pub const NTAG_CMD_GET_VERSION: u8 = 0x60;

/// Native NTAG READ opcode (returns four pages)
pub const NTAG_CMD_READ: u8 = 0x30;

/// GET_VERSION response length in bytes
pub const VERSION_RESPONSE_LEN: usize = 8;

/// Protocol byte every supported tag reports (ISO/IEC 14443-3 compliant)
pub const PROTOCOL_ISO14443_3: u8 = 0x03;

/// Bytes per page
pub const PAGE_SIZE: usize = 4;

/// Pages returned by one READ command
pub const PAGES_PER_QUAD: usize = 4;

/// Bytes returned by one READ command
pub const QUAD_SIZE: usize = PAGE_SIZE * PAGES_PER_QUAD;

/// Page holding the capability container
pub const CAPABILITY_PAGE: u8 = 0x03;

/// Offset of the memory size byte inside the capability READ response
pub const CAPABILITY_SIZE_OFFSET: usize = 2;

/// The capability size byte counts memory in units of this many bytes
pub const CAPABILITY_SIZE_UNIT: usize = 8;

/// TLV tag bytes
pub const TLV_NULL: u8 = 0x00;
/// Lock control TLV
pub const TLV_LOCK_CONTROL: u8 = 0x01;
/// Memory control TLV
pub const TLV_MEMORY_CONTROL: u8 = 0x02;
/// NDEF message TLV
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
/// Proprietary TLV
pub const TLV_PROPRIETARY: u8 = 0xFD;
/// Terminator TLV, ends the container
pub const TLV_TERMINATOR: u8 = 0xFE;
