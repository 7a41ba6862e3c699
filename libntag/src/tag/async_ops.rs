// libntag/src/tag/async_ops.rs

//! Async versions of the tag operations for [`AsyncTransport`] readers.
//! Response interpretation is shared with the blocking path.

use crate::constants::CAPABILITY_PAGE;
use crate::protocol::{Command, codec, decode_read, decode_version};
use crate::transport::AsyncTransport;
use crate::types::{CapabilityDescriptor, MemoryImage, PayloadStream, Quad, TagVersion};
use crate::tag::operations::memory::{QuadCollector, plan_reads};
use crate::utils::bytes_to_hex;
use crate::{Result, Unsupported, tlv};

async fn send_command<T: AsyncTransport + ?Sized>(transport: &mut T, cmd: &Command) -> Result<Vec<u8>> {
    let frame = codec::encode_command_frame(cmd)?;
    log::debug!("> {}", bytes_to_hex(&frame));
    let raw = transport.transmit(&frame).await?;
    log::debug!("< {}", bytes_to_hex(&raw));
    Ok(raw)
}

/// See [`operations::check_version`](super::operations::check_version).
pub async fn check_version<T: AsyncTransport + ?Sized>(
    transport: &mut T,
) -> std::result::Result<TagVersion, Unsupported> {
    let raw = send_command(transport, &Command::GetVersion)
        .await
        .map_err(|e| {
            log::warn!("failed to get version: {}", e);
            Unsupported::QueryFailed(e.to_string())
        })?;
    decode_version(&raw).inspect_err(|reason| log::warn!("version mismatch, {}", reason))
}

/// Read one quad starting at `page`.
pub async fn read_quad<T: AsyncTransport + ?Sized>(transport: &mut T, page: u8) -> Result<Quad> {
    let raw = send_command(transport, &Command::Read { page }).await?;
    decode_read(&raw)
}

/// See [`operations::read_all_memory`](super::operations::read_all_memory).
pub async fn read_all_memory<T: AsyncTransport + ?Sized>(transport: &mut T) -> Result<MemoryImage> {
    let cc = CapabilityDescriptor::from_quad(&read_quad(transport, CAPABILITY_PAGE).await?);
    let pages = plan_reads(&cc)?;

    let mut collector = QuadCollector::with_capacity(pages.len());
    for page in pages {
        collector.push(page, read_quad(transport, page).await)?;
    }
    Ok(collector.finish())
}

/// See [`operations::validate_and_read`](super::operations::validate_and_read).
pub async fn validate_and_read<T: AsyncTransport + ?Sized>(
    transport: &mut T,
) -> Result<PayloadStream> {
    let version = check_version(transport).await?;
    log::info!(
        "found {}, {} bytes user memory",
        version,
        version.storage.user_memory_bytes()
    );
    let image = read_all_memory(transport).await?;
    Ok(tlv::payload_stream(image.as_bytes())?)
}
