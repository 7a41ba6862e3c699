// libntag/src/protocol/responses/mod.rs

//! Response decoders.

pub mod read;
pub mod version;

pub use read::decode_read;
pub use version::decode_version;

use crate::protocol::Command;
use crate::types::{Quad, TagVersion};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Validated GET_VERSION response.
    Version {
        /// Accepted version.
        version: TagVersion,
    },
    /// READ response for the quad starting at `page`.
    Read {
        /// Page the READ started at.
        page: u8,
        /// The 16 bytes returned.
        quad: Quad,
    },
}

impl Response {
    /// Decode the raw response bytes for the command that produced them.
    ///
    /// An unrecognised version block surfaces as `Error::UnsupportedTag`.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::GetVersion => Ok(Self::Version {
                version: decode_version(data)?,
            }),
            Command::Read { page } => Ok(Self::Read {
                page: *page,
                quad: decode_read(data)?,
            }),
        }
    }
}
