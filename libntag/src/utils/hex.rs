//! Hexadecimal helpers used for logging and display purposes.
//!
//! Thin wrappers over the `hex` crate: compact and spaced output, and a
//! parser that tolerates whitespace (memory dumps are usually printed one
//! page per line).

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| ::hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes, ignoring ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    ::hex::decode(&cleaned).map_err(|e| format!("invalid hex '{}': {}", cleaned, e))
}
