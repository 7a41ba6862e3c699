//! Tag operations over a borrowed transport.

pub mod memory;
pub mod pipeline;
pub mod version;

// Re-export the operations at the operations root so callers can use
// `crate::tag::operations::read_all_memory(...)` directly.
pub use memory::{read_all_memory, read_capability, read_quad};
pub use pipeline::{read_message, validate_and_read};
pub use version::check_version;

use crate::protocol::{Command, codec};
use crate::transport::Transport;
use crate::utils::bytes_to_hex;
use crate::Result;

/// Frame one command, transmit it and return the raw response bytes.
pub(crate) fn send_command(transport: &mut dyn Transport, cmd: &Command) -> Result<Vec<u8>> {
    let frame = codec::encode_command_frame(cmd)?;
    log::debug!("> {}", bytes_to_hex(&frame));
    let raw = transport.transmit(&frame)?;
    log::debug!("< {}", bytes_to_hex(&raw));
    Ok(raw)
}
