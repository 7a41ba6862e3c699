//! Version check, memory read and TLV extraction as one call.

use crate::message::PayloadCodec;
use crate::transport::Transport;
use crate::types::PayloadStream;
use crate::{Error, Result, tlv};

/// Validate the tag, read its memory and return the NDEF payload stream.
///
/// This is the per-candidate entry point used by scanners: an unsupported
/// tag yields `Error::UnsupportedTag`, every other failure aborts this tag.
pub fn validate_and_read(transport: &mut dyn Transport) -> Result<PayloadStream> {
    let version = super::check_version(transport)?;
    log::info!(
        "found {}, {} bytes user memory",
        version,
        version.storage.user_memory_bytes()
    );

    let image = super::read_all_memory(transport)?;
    let blocks = tlv::parse(image.as_bytes())?;
    log::debug!(
        "{} byte image holds {} NDEF message block(s)",
        image.len(),
        blocks.len()
    );
    Ok(blocks.concat())
}

/// `validate_and_read` followed by the payload codec.
pub fn read_message<C: PayloadCodec>(
    transport: &mut dyn Transport,
    codec: &C,
) -> Result<Vec<C::Message>> {
    let stream = validate_and_read(transport)?;
    codec
        .decode(&stream)
        .map_err(|e| Error::Decode(Box::new(e)))
}
