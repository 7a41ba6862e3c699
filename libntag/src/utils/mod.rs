//! Utilities for libntag: small, reusable helpers used across the crate.
//!
//! Hex formatting is used by transport logging, fixtures and the dump
//! example.

pub mod hex;

// Re-export the helpers at the `utils` module level so callers can use
// `crate::utils::bytes_to_hex(...)` directly.
pub use self::hex::*;
