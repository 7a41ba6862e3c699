//! Version validation.

use crate::Unsupported;
use crate::protocol::{Command, decode_version};
use crate::transport::Transport;
use crate::types::TagVersion;

/// Verify that the connected tag is an NTAG 21x before its memory layout
/// is trusted.
///
/// Strict policy: an unknown family header, an unknown storage subtype or
/// a protocol byte other than 0x03 all reject the tag. A failed exchange
/// also rejects it instead of being propagated.
pub fn check_version(transport: &mut dyn Transport) -> Result<TagVersion, Unsupported> {
    let raw = match super::send_command(transport, &Command::GetVersion) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("failed to get version: {}", e);
            return Err(Unsupported::QueryFailed(e.to_string()));
        }
    };

    match decode_version(&raw) {
        Ok(version) => {
            log::debug!("tag version ok: {}", version);
            Ok(version)
        }
        Err(reason) => {
            log::warn!("version mismatch, {}", reason);
            Err(reason)
        }
    }
}
