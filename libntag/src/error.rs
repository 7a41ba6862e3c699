// libntag/src/error.rs

//! Crate error types.

use thiserror::Error;

use crate::tlv::TlvError;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Reader I/O failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The transport gave up waiting for a response.
    #[error("operation timed out")]
    Timeout,

    /// A frame or response is shorter (or longer) than its layout.
    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the layout requires.
        expected: usize,
        /// Length received.
        actual: usize,
    },

    /// A pseudo-APDU frame could not be built or read.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// Version validation rejected the tag.
    #[error("unsupported tag: {0}")]
    UnsupportedTag(#[from] Unsupported),

    /// The capability container announces more memory than READ can address.
    #[error("capability size byte {size_byte:#04x} needs {quads} quads, beyond the page address range")]
    CapacityOutOfRange {
        /// Raw capability size byte.
        size_byte: u8,
        /// Quads it would take to read.
        quads: usize,
    },

    /// Memory read aborted part way through.
    #[error("memory read aborted after {quads_read} quad(s): {source}")]
    Read {
        /// Quads read successfully before the failure.
        quads_read: usize,
        /// The failed exchange.
        #[source]
        source: Box<Error>,
    },

    /// The memory image is not a valid TLV container.
    #[error("tlv parse error: {0}")]
    Parse(#[from] TlvError),

    /// The payload codec rejected the stream.
    #[error("payload decode error: {0}")]
    Decode(Box<dyn std::error::Error + Send + Sync>),

    /// No candidate held a supported tag with a message.
    #[error("no supported tag found")]
    TagNotFound,
}

/// Reason a tag failed version validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    /// The GET_VERSION exchange itself failed.
    #[error("failed to get version: {0}")]
    QueryFailed(String),

    /// Fewer than 8 version bytes.
    #[error("version response too short: expected {expected}, got {actual}")]
    ShortResponse {
        /// Always 8.
        expected: usize,
        /// Bytes received.
        actual: usize,
    },

    /// Family header not in the known table.
    #[error("unknown family header {0:02x?}")]
    UnknownFamily([u8; 6]),

    /// Storage subtype unknown, or not made in this family.
    #[error("unknown storage subtype {0:#04x}")]
    UnknownSubtype(u8),

    /// Protocol byte is not ISO/IEC 14443-3.
    #[error("unsupported protocol {actual:#04x} (expected {expected:#04x})")]
    ProtocolMismatch {
        /// 0x03
        expected: u8,
        /// Byte 7 of the response.
        actual: u8,
    },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for failures that only rule out the current tag; a scan may
    /// move on to the next candidate.
    pub fn is_unsupported_tag(&self) -> bool {
        matches!(self, Error::UnsupportedTag(_))
    }

    /// Number of quads read before a memory read was aborted, if this is
    /// a read error.
    pub fn quads_read(&self) -> Option<usize> {
        match self {
            Error::Read { quads_read, .. } => Some(*quads_read),
            _ => None,
        }
    }
}
