//! Transport layer for the TL1 client
//!
//! This crate provides name resolution and the TCP transport the exchange
//! engine runs over.

pub mod resolver;
pub mod stream;
pub mod tcp;

pub use resolver::resolve;
pub use stream::{StreamAccessor, TransportLayer};
pub use tcp::{TcpSettings, TcpTransport};
