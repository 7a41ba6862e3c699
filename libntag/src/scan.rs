// libntag/src/scan.rs

//! Sequential scan over candidate reader sessions.
//!
//! Candidates are tried one after another; commands for different tags
//! are never interleaved.

use crate::message::PayloadCodec;
use crate::tag::operations::read_message;
use crate::transport::Transport;
use crate::{Error, Result};

/// Outcome of probing a single candidate.
#[derive(Debug)]
pub enum Probe<M> {
    /// Supported tag with a non-empty message.
    Found(Vec<M>),
    /// Supported tag, but no records in it.
    Empty,
    /// Version check rejected the tag.
    Unsupported(crate::Unsupported),
}

/// Probe one candidate: version check, memory read, TLV parse, decode.
///
/// Only a rejected version is folded into the result; read, parse and
/// decode failures are returned as errors.
pub fn probe<C: PayloadCodec>(transport: &mut dyn Transport, codec: &C) -> Result<Probe<C::Message>> {
    match read_message(transport, codec) {
        Ok(records) if records.is_empty() => Ok(Probe::Empty),
        Ok(records) => Ok(Probe::Found(records)),
        Err(Error::UnsupportedTag(reason)) => Ok(Probe::Unsupported(reason)),
        Err(e) => Err(e),
    }
}

/// Return the message of the first candidate holding one.
///
/// Unsupported and empty tags are skipped. Any other failure stops the
/// scan and is returned; exhausting the candidates yields
/// `Error::TagNotFound`.
pub fn scan_for_message<I, T, C>(candidates: I, codec: &C) -> Result<Vec<C::Message>>
where
    I: IntoIterator<Item = T>,
    T: Transport,
    C: PayloadCodec,
{
    for (index, mut candidate) in candidates.into_iter().enumerate() {
        let label = candidate
            .name()
            .unwrap_or_else(|| format!("candidate #{}", index));

        match probe(&mut candidate, codec)? {
            Probe::Found(records) => {
                log::info!("{}: {} record(s)", label, records.len());
                return Ok(records);
            }
            Probe::Empty => log::info!("{}: no NDEF records", label),
            Probe::Unsupported(reason) => log::info!("{}: skipped, {}", label, reason),
        }
    }

    log::info!("tag not found");
    Err(Error::TagNotFound)
}
