// libntag/src/protocol/codec.rs

//! Command framing and response decoding in one place.

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into the full pseudo-APDU sent to the reader.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let payload = cmd.encode();
    Frame::encode(&payload)
}

/// Parse the raw reader response for the given command.
pub fn decode_response(cmd: &Command, raw: &[u8]) -> Result<Response> {
    Response::decode(cmd, raw)
}
