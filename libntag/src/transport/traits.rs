// libntag/src/transport/traits.rs

//! Transport trait.

use crate::Result;

/// Transport trait abstracts the reader session away from protocol logic.
///
/// One call is one command/response exchange on an already connected
/// tag. Implementations strip any reader status words and return only the
/// tag's response bytes; they do not retry and apply their own timeout
/// policy, if any.
pub trait Transport {
    /// Send a complete command frame and return the raw response bytes.
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Human readable reader name for diagnostics.
    fn name(&self) -> Option<String> {
        None
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).transmit(command)
    }

    fn name(&self) -> Option<String> {
        (**self).name()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).transmit(command)
    }

    fn name(&self) -> Option<String> {
        (**self).name()
    }
}
