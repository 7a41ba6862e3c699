// libntag/src/tag/mod.rs

//! Tag session on top of a connected transport.
//!
//! [`Tag`] enforces at compile time that memory is only read after the
//! version check passed. The same steps are available as free functions in
//! [`operations`] for callers that manage the transport themselves.

use crate::message::PayloadCodec;
use crate::transport::Transport;
use crate::types::{MemoryImage, PayloadStream, TagVersion};
use crate::{Result, Unsupported, tlv};

#[cfg(feature = "async")]
pub mod async_ops;
pub mod operations;

/// Type-state marker: version not checked yet.
pub struct Unverified;
/// Type-state marker: version check passed.
pub struct Verified {
    version: TagVersion,
}

/// Tag handle borrowing an established reader session.
pub struct Tag<'t, State = Unverified> {
    transport: &'t mut dyn Transport,
    state: State,
}

impl<'t> Tag<'t, Unverified> {
    /// Wrap a connected transport. Nothing is sent yet.
    pub fn new(transport: &'t mut dyn Transport) -> Self {
        Self {
            transport,
            state: Unverified,
        }
    }

    /// Run the version check. On failure the transport borrow is released
    /// so the caller can move on to another candidate.
    pub fn verify(self) -> std::result::Result<Tag<'t, Verified>, Unsupported> {
        let version = operations::check_version(&mut *self.transport)?;
        Ok(Tag {
            transport: self.transport,
            state: Verified { version },
        })
    }
}

impl Tag<'_, Verified> {
    /// Version accepted by `verify`.
    pub fn version(&self) -> TagVersion {
        self.state.version
    }

    /// Read the data area announced by the capability container.
    pub fn read_all_memory(&mut self) -> Result<MemoryImage> {
        operations::read_all_memory(&mut *self.transport)
    }

    /// Read memory and extract the NDEF payload stream.
    pub fn read_payload(&mut self) -> Result<PayloadStream> {
        let image = self.read_all_memory()?;
        Ok(tlv::payload_stream(image.as_bytes())?)
    }

    /// Read the payload stream and decode it with `codec`.
    pub fn read_message<C: PayloadCodec>(&mut self, codec: &C) -> Result<Vec<C::Message>> {
        let stream = self.read_payload()?;
        codec
            .decode(&stream)
            .map_err(|e| crate::Error::Decode(Box::new(e)))
    }
}
