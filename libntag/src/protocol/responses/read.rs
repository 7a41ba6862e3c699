// libntag/src/protocol/responses/read.rs

//! READ response.

use crate::Result;
use crate::types::Quad;

/// Decode a READ response: four pages, 16 bytes.
/// Readers that append extra bytes are tolerated; only the first 16 are
/// kept.
pub fn decode_read(data: &[u8]) -> Result<Quad> {
    Quad::try_from(data)
}
