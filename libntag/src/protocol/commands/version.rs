// libntag/src/protocol/commands/version.rs

//! GET_VERSION command.

/// Encode a native GET_VERSION command (opcode 0x60, no arguments).
pub fn encode_get_version() -> Vec<u8> {
    vec![crate::constants::NTAG_CMD_GET_VERSION]
}
