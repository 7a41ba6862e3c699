// libntag/src/protocol/commands/mod.rs

//! Native tag commands.

pub mod read;
pub mod version;

pub use read::encode_read;
pub use version::encode_get_version;

/// Native NTAG command. Per-command encoders live in
/// `protocol::commands::<name>.rs`; the pseudo-APDU wrapper is added by
/// `protocol::codec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// GET_VERSION, eight byte response.
    GetVersion,
    /// READ four pages starting at `page`.
    Read {
        /// First page; the tag returns this page and the next three.
        page: u8,
    },
}

impl Command {
    /// Return the native command opcode.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetVersion => crate::constants::NTAG_CMD_GET_VERSION,
            Self::Read { .. } => crate::constants::NTAG_CMD_READ,
        }
    }

    /// Encode the native command (opcode + arguments).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetVersion => encode_get_version(),
            Self::Read { page } => encode_read(*page),
        }
    }
}
