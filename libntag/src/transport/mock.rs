// libntag/src/transport/mock.rs

//! In-memory transports for tests and examples.

use crate::constants::{
    NTAG_CMD_GET_VERSION, NTAG_CMD_READ, PAGE_SIZE, QUAD_SIZE, VERSION_RESPONSE_LEN,
};
use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Frames received, oldest first.
    pub sent: Vec<Vec<u8>>,
    /// Queued replies; `Err` entries fail the exchange with a transport
    /// error carrying the message.
    pub responses: Vec<std::result::Result<Vec<u8>, String>>,
    /// Value returned by `name()`.
    pub reader_name: Option<String>,
}

impl MockTransport {
    /// Empty script; every exchange times out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty script with a reader name.
    pub fn named(name: &str) -> Self {
        Self {
            reader_name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Queue a successful reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    /// Queue a transport failure (e.g. card removed mid-read).
    pub fn push_failure(&mut self, message: &str) {
        self.responses.push(Err(message.to_string()));
    }
}

impl Transport for MockTransport {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(command.to_vec());
        if self.responses.is_empty() {
            return Err(Error::Timeout);
        }
        self.responses.remove(0).map_err(Error::Transport)
    }

    fn name(&self) -> Option<String> {
        self.reader_name.clone()
    }
}

/// Simulated NTAG 21x: answers GET_VERSION and READ from an in-memory page
/// array the way a real tag does (READ wraps around at the last page).
#[derive(Debug, Clone)]
pub struct MockTag {
    /// GET_VERSION reply.
    pub version: [u8; VERSION_RESPONSE_LEN],
    /// Page array from page 0.
    pub memory: Vec<u8>,
    /// Frames received, oldest first.
    pub sent: Vec<Vec<u8>>,
    /// Fail every exchange from this (0-based) command index onwards.
    pub fail_from: Option<usize>,
}

impl MockTag {
    /// `memory` is the full page array starting at page 0; it is padded to
    /// a whole number of pages.
    pub fn new(version: [u8; VERSION_RESPONSE_LEN], mut memory: Vec<u8>) -> Self {
        let rem = memory.len() % PAGE_SIZE;
        if rem != 0 {
            memory.resize(memory.len() + PAGE_SIZE - rem, 0);
        }
        Self {
            version,
            memory,
            sent: Vec::new(),
            fail_from: None,
        }
    }

    /// Simulate removal: fail every command from `index` on.
    pub fn fail_from(mut self, index: usize) -> Self {
        self.fail_from = Some(index);
        self
    }

    /// Page addresses of every READ received so far.
    pub fn read_pages(&self) -> Vec<u8> {
        self.sent
            .iter()
            .filter_map(|f| Frame::decode(f).ok())
            .filter(|p| p.first() == Some(&NTAG_CMD_READ))
            .filter_map(|p| p.get(1).copied())
            .collect()
    }

    fn read_quad(&self, page: u8) -> Vec<u8> {
        let total = self.memory.len();
        if total == 0 {
            return vec![0; QUAD_SIZE];
        }
        let start = page as usize * PAGE_SIZE;
        (0..QUAD_SIZE).map(|i| self.memory[(start + i) % total]).collect()
    }
}

impl Transport for MockTag {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        let index = self.sent.len();
        self.sent.push(command.to_vec());
        if self.fail_from.is_some_and(|n| index >= n) {
            return Err(Error::Transport("card removed".into()));
        }

        let native = Frame::decode(command)?;
        match native.as_slice() {
            [NTAG_CMD_GET_VERSION] => Ok(self.version.to_vec()),
            [NTAG_CMD_READ, page] => Ok(self.read_quad(*page)),
            other => Err(Error::Transport(format!(
                "NAK: unsupported command {}",
                crate::utils::bytes_to_hex(other)
            ))),
        }
    }

    fn name(&self) -> Option<String> {
        Some("mock NTAG".to_string())
    }
}
