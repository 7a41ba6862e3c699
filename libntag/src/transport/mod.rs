// libntag/src/transport/mod.rs

//! Reader transports.

#[cfg(feature = "async")]
pub mod async_traits;
pub mod mock;
pub mod traits;

#[cfg(feature = "async")]
pub use async_traits::AsyncTransport;
pub use mock::{MockTag, MockTransport};
pub use traits::Transport;
