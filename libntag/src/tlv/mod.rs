// libntag/src/tlv/mod.rs

//! NFC Forum Type 2 tag TLV container.
//!
//! Tag memory from page 4 onwards holds a sequence of TLV blocks:
//! `[tag(1)] [length(1)] [value(length)]`, where NULL (0x00) and
//! TERMINATOR (0xFE) blocks carry neither length nor value. NDEF message
//! blocks (0x03) are extracted; every other block is skipped.

pub mod reader;

pub use reader::TlvReader;

use thiserror::Error;

use crate::constants::{
    TLV_LOCK_CONTROL, TLV_MEMORY_CONTROL, TLV_NDEF_MESSAGE, TLV_NULL, TLV_PROPRIETARY,
    TLV_TERMINATOR,
};

/// TLV parse failures. Offsets are byte positions inside the memory image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TlvError {
    /// Image ended before a TERMINATOR, or inside a TLV header.
    #[error("truncated TLV stream at offset {offset}")]
    Truncated {
        /// Where the missing byte was expected.
        offset: usize,
    },

    /// A length byte points past the end of the image.
    #[error(
        "length exceeds available data: block at offset {offset} declares {length} bytes, {available} left"
    )]
    LengthOverrun {
        /// Offset of the tag byte.
        offset: usize,
        /// Declared value length.
        length: usize,
        /// Bytes left after the length byte.
        available: usize,
    },
}

/// TLV tag byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlvTag {
    /// 0x00, padding
    Null,
    /// 0x01
    LockControl,
    /// 0x02
    MemoryControl,
    /// 0x03
    NdefMessage,
    /// 0xFD
    Proprietary,
    /// 0xFE, end of container
    Terminator,
    /// Any other tag byte
    Unknown(u8),
}

impl TlvTag {
    /// Classify a tag byte.
    pub fn from_byte(b: u8) -> Self {
        match b {
            TLV_NULL => Self::Null,
            TLV_LOCK_CONTROL => Self::LockControl,
            TLV_MEMORY_CONTROL => Self::MemoryControl,
            TLV_NDEF_MESSAGE => Self::NdefMessage,
            TLV_PROPRIETARY => Self::Proprietary,
            TLV_TERMINATOR => Self::Terminator,
            other => Self::Unknown(other),
        }
    }

    /// Raw tag byte.
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Null => TLV_NULL,
            Self::LockControl => TLV_LOCK_CONTROL,
            Self::MemoryControl => TLV_MEMORY_CONTROL,
            Self::NdefMessage => TLV_NDEF_MESSAGE,
            Self::Proprietary => TLV_PROPRIETARY,
            Self::Terminator => TLV_TERMINATOR,
            Self::Unknown(b) => *b,
        }
    }
}

/// One block read from the container. Values borrow from the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlvRecord<'a> {
    /// NULL padding byte
    Null,
    /// Value of an NDEF message TLV.
    Message(&'a [u8]),
    /// TERMINATOR; nothing follows.
    Terminator,
    /// Any other length-carrying block (lock/memory control, proprietary,
    /// unassigned tags).
    Other {
        /// Tag of the skipped block.
        tag: TlvTag,
        /// Its value.
        value: &'a [u8],
    },
}

/// Extract the value of every NDEF message block, in order.
///
/// The image must end with a TERMINATOR block, except that an empty
/// image is read as an empty container.
pub fn parse(image: &[u8]) -> Result<Vec<Vec<u8>>, TlvError> {
    let mut reader = TlvReader::new(image);
    let mut blocks = Vec::new();
    while let Some(record) = reader.next_record()? {
        if let TlvRecord::Message(payload) = record {
            blocks.push(payload.to_vec());
        }
    }
    log::trace!("TLV container ended at offset {}", reader.position());
    Ok(blocks)
}

/// Parse and concatenate all NDEF message values into one payload stream.
pub fn payload_stream(image: &[u8]) -> Result<Vec<u8>, TlvError> {
    Ok(parse(image)?.concat())
}
