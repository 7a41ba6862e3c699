// libntag/src/protocol/commands/read.rs

//! READ command.

/// Encode a native READ command (opcode 0x30) for the quad starting at
/// `page`.
pub fn encode_read(page: u8) -> Vec<u8> {
    vec![crate::constants::NTAG_CMD_READ, page]
}
