// libntag/src/message/ndef.rs

//! NDEF record decoding (NFC Forum NDEF 1.0).
//!
//! Record layout:
//! `[flags|TNF(1)] [type_len(1)] [payload_len(1 or 4)] [id_len(0 or 1)]
//!  [type] [id] [payload]`

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::PayloadCodec;

const FLAG_MB: u8 = 0x80;
const FLAG_ME: u8 = 0x40;
const FLAG_CF: u8 = 0x20;
const FLAG_SR: u8 = 0x10;
const FLAG_IL: u8 = 0x08;
const TNF_MASK: u8 = 0x07;

/// URI identifier codes (NFC Forum URI RTD), indexed by code.
const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// NDEF decoding failures. Offsets are byte positions in the payload stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NdefError {
    /// A record runs past the end of the stream.
    #[error("truncated NDEF record at offset {offset}: need {needed} more byte(s)")]
    Truncated {
        /// Offset of the field that does not fit.
        offset: usize,
        /// Missing byte count.
        needed: usize,
    },

    /// First record of a message lacks MB.
    #[error("record at offset {offset} does not begin a message")]
    MissingMessageBegin {
        /// Record offset.
        offset: usize,
    },

    /// MB set on a record inside a message.
    #[error("message begin flag inside a message at offset {offset}")]
    UnexpectedMessageBegin {
        /// Record offset.
        offset: usize,
    },

    /// Stream ended before a record with ME.
    #[error("message not terminated")]
    UnterminatedMessage,

    /// Chunk sequence is malformed.
    #[error("invalid chunk at offset {offset}: {reason}")]
    InvalidChunk {
        /// Record offset.
        offset: usize,
        /// What is wrong with the chunk.
        reason: &'static str,
    },
}

/// Type Name Format
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tnf {
    /// Empty record
    Empty = 0,
    /// NFC Forum well-known type
    WellKnown = 1,
    /// RFC 2046 media type
    Media = 2,
    /// Absolute URI
    AbsoluteUri = 3,
    /// NFC Forum external type
    External = 4,
    /// Unknown
    Unknown = 5,
    /// Continuation chunk
    Unchanged = 6,
    /// Reserved
    Reserved = 7,
}

impl Tnf {
    /// TNF from the low three bits of a record header.
    pub fn from_bits(bits: u8) -> Self {
        match bits & TNF_MASK {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Media,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// Well-known Text record content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// IANA language code, e.g. `en`.
    pub language: String,
    /// Decoded text.
    pub text: String,
}

/// Decoded NDEF record. Chunked records are returned reassembled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NdefRecord {
    /// Type name format from the record header.
    pub tnf: Tnf,
    /// Record type, e.g. `T` or `U` for well-known records.
    pub record_type: Vec<u8>,
    /// Record ID, empty when IL is not set.
    pub id: Vec<u8>,
    /// Payload, reassembled across chunks.
    pub payload: Vec<u8>,
}

impl NdefRecord {
    fn is_well_known(&self, rtd: &[u8]) -> bool {
        self.tnf == Tnf::WellKnown && self.record_type == rtd
    }

    /// Content of a well-known `T` record.
    pub fn text(&self) -> Option<Text> {
        if !self.is_well_known(b"T") {
            return None;
        }
        let (&status, rest) = self.payload.split_first()?;
        let lang_len = (status & 0x3F) as usize;
        if rest.len() < lang_len {
            return None;
        }
        let (lang, body) = rest.split_at(lang_len);
        let language = String::from_utf8(lang.to_vec()).ok()?;
        let text = if status & 0x80 != 0 {
            decode_utf16(body)?
        } else {
            String::from_utf8(body.to_vec()).ok()?
        };
        Some(Text { language, text })
    }

    /// Expanded URI of a well-known `U` record.
    pub fn uri(&self) -> Option<String> {
        if !self.is_well_known(b"U") {
            return None;
        }
        let (&code, rest) = self.payload.split_first()?;
        let prefix = URI_PREFIXES.get(code as usize).copied().unwrap_or("");
        let tail = std::str::from_utf8(rest).ok()?;
        Some(format!("{}{}", prefix, tail))
    }
}

/// UTF-16 text, big endian unless a little-endian BOM is present.
fn decode_utf16(body: &[u8]) -> Option<String> {
    if body.len() % 2 != 0 {
        return None;
    }
    let (little, body) = match body {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, body),
    };
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|c| {
            if little {
                u16::from_le_bytes([c[0], c[1]])
            } else {
                u16::from_be_bytes([c[0], c[1]])
            }
        })
        .collect();
    String::from_utf16(&units).ok()
}

struct RawRecord<'a> {
    flags: u8,
    tnf: Tnf,
    record_type: &'a [u8],
    id: &'a [u8],
    payload: &'a [u8],
}

impl RawRecord<'_> {
    fn has(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], NdefError> {
        let available = self.data.len() - self.pos;
        if n > available {
            return Err(NdefError::Truncated {
                offset: self.pos,
                needed: n - available,
            });
        }
        let s = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }

    fn u8(&mut self) -> Result<u8, NdefError> {
        Ok(self.take(1)?[0])
    }

    fn record(&mut self) -> Result<RawRecord<'a>, NdefError> {
        let flags = self.u8()?;
        let type_len = self.u8()? as usize;
        let payload_len = if flags & FLAG_SR != 0 {
            self.u8()? as usize
        } else {
            let b = self.take(4)?;
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as usize
        };
        let id_len = if flags & FLAG_IL != 0 {
            self.u8()? as usize
        } else {
            0
        };
        Ok(RawRecord {
            flags,
            tnf: Tnf::from_bits(flags),
            record_type: self.take(type_len)?,
            id: self.take(id_len)?,
            payload: self.take(payload_len)?,
        })
    }
}

/// Decode one or more back-to-back NDEF messages into a flat record list.
pub fn decode_records(data: &[u8]) -> Result<Vec<NdefRecord>, NdefError> {
    let mut cursor = Cursor { data, pos: 0 };
    let mut records = Vec::new();
    let mut in_message = false;
    let mut chunk: Option<NdefRecord> = None;

    while cursor.pos < data.len() {
        let offset = cursor.pos;
        let raw = cursor.record()?;

        if !in_message {
            if !raw.has(FLAG_MB) {
                return Err(NdefError::MissingMessageBegin { offset });
            }
            in_message = true;
        } else if raw.has(FLAG_MB) {
            return Err(NdefError::UnexpectedMessageBegin { offset });
        }

        match chunk.take() {
            None => {
                if raw.tnf == Tnf::Unchanged {
                    return Err(NdefError::InvalidChunk {
                        offset,
                        reason: "TNF unchanged outside a chunked record",
                    });
                }
                let record = NdefRecord {
                    tnf: raw.tnf,
                    record_type: raw.record_type.to_vec(),
                    id: raw.id.to_vec(),
                    payload: raw.payload.to_vec(),
                };
                if raw.has(FLAG_CF) {
                    chunk = Some(record);
                } else {
                    records.push(record);
                }
            }
            Some(mut acc) => {
                if raw.tnf != Tnf::Unchanged || !raw.record_type.is_empty() || raw.has(FLAG_IL) {
                    return Err(NdefError::InvalidChunk {
                        offset,
                        reason: "continuation chunk must use TNF unchanged without type or id",
                    });
                }
                acc.payload.extend_from_slice(raw.payload);
                if raw.has(FLAG_CF) {
                    chunk = Some(acc);
                } else {
                    records.push(acc);
                }
            }
        }

        if raw.has(FLAG_ME) {
            if chunk.is_some() {
                return Err(NdefError::InvalidChunk {
                    offset,
                    reason: "message ends inside a chunked record",
                });
            }
            in_message = false;
        }
    }

    if in_message {
        return Err(NdefError::UnterminatedMessage);
    }
    Ok(records)
}

/// NDEF payload codec
#[derive(Debug, Clone, Copy, Default)]
pub struct NdefCodec;

impl PayloadCodec for NdefCodec {
    type Message = NdefRecord;
    type Error = NdefError;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<NdefRecord>, NdefError> {
        decode_records(bytes)
    }
}
