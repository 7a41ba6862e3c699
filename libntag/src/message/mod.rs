// libntag/src/message/mod.rs

//! Decoding of the recovered payload stream.
//!
//! The reader core hands the concatenated NDEF TLV values to a
//! [`PayloadCodec`]; [`ndef::NdefCodec`] is the codec used for NTAG
//! content.

pub mod ndef;

pub use ndef::{NdefCodec, NdefError, NdefRecord, Text, Tnf, decode_records};

/// Turns a payload stream into structured messages.
pub trait PayloadCodec {
    /// Decoded unit, e.g. one NDEF record.
    type Message;
    /// Codec failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decode a whole payload stream. Empty input yields no messages.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Self::Message>, Self::Error>;
}
