// libntag/src/transport/async_traits.rs

//! Async transport trait (feature `async`).

use async_trait::async_trait;

use crate::Result;

/// Async counterpart of [`Transport`](crate::transport::Transport) for
/// readers driven from a tokio runtime. Same contract: one call is one
/// exchange, no retries.
#[async_trait]
pub trait AsyncTransport: Send {
    /// Send a complete command frame and return the raw response bytes.
    async fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Human readable reader name for diagnostics.
    fn name(&self) -> Option<String> {
        None
    }
}

#[async_trait]
impl AsyncTransport for crate::transport::mock::MockTag {
    async fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        crate::transport::Transport::transmit(self, command)
    }

    fn name(&self) -> Option<String> {
        crate::transport::Transport::name(self)
    }
}

#[async_trait]
impl AsyncTransport for crate::transport::mock::MockTransport {
    async fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        crate::transport::Transport::transmit(self, command)
    }

    fn name(&self) -> Option<String> {
        crate::transport::Transport::name(self)
    }
}
