// libntag/src/protocol/frame.rs

//! Pseudo-APDU framing.

use crate::constants::{PSEUDO_APDU_HEADER, PSEUDO_APDU_HEADER_LEN, PSEUDO_APDU_MAX_PAYLOAD_LEN};
use crate::{Error, Result};

/// Pseudo-APDU wrapper that carries a native tag command through a
/// PC/SC-style reader.
/// Format: [CLA=FF] [INS=EF] [P1=00] [P2=00] [Lc(1)] [Native command(Lc)]
pub struct Frame;

impl Frame {
    /// Wrap a native command into a full pseudo-APDU
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() {
            return Err(Error::FrameFormat("empty native command".into()));
        }
        if payload.len() > PSEUDO_APDU_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PSEUDO_APDU_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let mut out = Vec::with_capacity(PSEUDO_APDU_HEADER_LEN + payload.len());
        out.extend_from_slice(&PSEUDO_APDU_HEADER);
        out.push(payload.len() as u8);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Unwrap a pseudo-APDU and return the native command
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < PSEUDO_APDU_HEADER_LEN {
            return Err(Error::InvalidLength {
                expected: PSEUDO_APDU_HEADER_LEN,
                actual: frame.len(),
            });
        }

        if frame[..4] != PSEUDO_APDU_HEADER {
            return Err(Error::FrameFormat("invalid pseudo-APDU header".into()));
        }

        let lc = frame[4] as usize;
        let required_len = PSEUDO_APDU_HEADER_LEN + lc;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        Ok(frame[PSEUDO_APDU_HEADER_LEN..].to_vec())
    }
}
