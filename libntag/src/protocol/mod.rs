// libntag/src/protocol/mod.rs

//! Wire protocol: pseudo-APDU frames, native commands and response
//! decoders.

pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::*;
pub use frame::Frame;
pub use responses::*;
