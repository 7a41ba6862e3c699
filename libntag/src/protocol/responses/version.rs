// libntag/src/protocol/responses/version.rs

//! GET_VERSION response.

use crate::Unsupported;
use crate::types::TagVersion;

/// Decode a GET_VERSION response.
/// Layout: family_header(6) + storage_subtype(1) + protocol(1)
///
/// Matching is strict: an unknown family header, an unknown subtype or a
/// protocol byte other than 0x03 all reject the tag. Extra trailing bytes
/// are ignored.
pub fn decode_version(data: &[u8]) -> Result<TagVersion, Unsupported> {
    TagVersion::try_from(data)
}
