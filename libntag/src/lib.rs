// libntag/src/lib.rs

//! libntag
//!
//! Pure Rust reader for NXP NTAG 21x tags: version check, full memory
//! read and NDEF TLV extraction over a PC/SC-style command transport.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod message;
pub mod prelude;
pub mod protocol;
pub mod scan;
pub mod tag;
pub mod test_support;
pub mod tlv;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the data model in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
