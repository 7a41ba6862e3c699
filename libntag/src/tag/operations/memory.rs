//! Capability and memory reads.

use crate::constants::CAPABILITY_PAGE;
use crate::protocol::{Command, decode_read};
use crate::transport::Transport;
use crate::types::{CapabilityDescriptor, MemoryImage, Quad};
use crate::{Error, Result};

/// Read one quad (four pages) starting at `page`.
pub fn read_quad(transport: &mut dyn Transport, page: u8) -> Result<Quad> {
    let raw = super::send_command(transport, &Command::Read { page })?;
    decode_read(&raw)
}

/// Read the capability container (page 3).
pub fn read_capability(transport: &mut dyn Transport) -> Result<CapabilityDescriptor> {
    let quad = read_quad(transport, CAPABILITY_PAGE)?;
    Ok(CapabilityDescriptor::from_quad(&quad))
}

/// Read the whole data area announced by the capability container.
///
/// Quads are read one at a time from page 4 upwards. A failed exchange
/// aborts the read; the partial image is dropped and the error reports how
/// many quads had been read.
pub fn read_all_memory(transport: &mut dyn Transport) -> Result<MemoryImage> {
    let cc = read_capability(transport)?;
    let pages = plan_reads(&cc)?;

    let mut collector = QuadCollector::with_capacity(pages.len());
    for page in pages {
        collector.push(page, read_quad(transport, page))?;
    }
    Ok(collector.finish())
}

/// Page addresses to read for `cc`. Shared with the async path.
pub(crate) fn plan_reads(cc: &CapabilityDescriptor) -> Result<Vec<u8>> {
    let pages = cc.quad_addresses()?;
    log::debug!(
        "capability size byte {:#04x}: {} bytes, {} quads",
        cc.size_byte(),
        cc.total_bytes(),
        pages.len()
    );
    Ok(pages)
}

/// Accumulates quads in read order; the first failure turns into
/// `Error::Read` carrying the progress so far.
pub(crate) struct QuadCollector {
    quads: Vec<Quad>,
}

impl QuadCollector {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            quads: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, page: u8, result: Result<Quad>) -> Result<()> {
        match result {
            Ok(q) => {
                self.quads.push(q);
                Ok(())
            }
            Err(e) => {
                log::warn!(
                    "memory read aborted at page {} after {} quad(s): {}",
                    page,
                    self.quads.len(),
                    e
                );
                Err(Error::Read {
                    quads_read: self.quads.len(),
                    source: Box::new(e),
                })
            }
        }
    }

    pub(crate) fn finish(self) -> MemoryImage {
        MemoryImage::from_quads(&self.quads)
    }
}
