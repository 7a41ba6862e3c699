// libntag/src/prelude.rs

//! Commonly used types and operations.

pub use crate::message::{NdefCodec, NdefRecord, PayloadCodec, Tnf};
pub use crate::protocol::{Command, Response};
pub use crate::scan::scan_for_message;
pub use crate::tag::operations::{check_version, read_all_memory, read_message, validate_and_read};
pub use crate::tag::{Tag, Unverified, Verified};
pub use crate::transport::Transport;
pub use crate::{
    CapabilityDescriptor, Error, MemoryImage, PayloadStream, ProductFamily, Quad, Result,
    StorageSize, TagVersion, Unsupported,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
