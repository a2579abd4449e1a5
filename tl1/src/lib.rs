//! TL1 - minimal Transaction Language 1 client
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `tl1-core`: error taxonomy and TL1 command type
//! - `tl1-transport`: name resolution and TCP transport
//! - `tl1-client`: exchange engine, configuration, lifecycle log, binary
//!
//! # Usage
//!
//! ```no_run
//! use tl1::core::Tl1Command;
//! use tl1::transport::{TcpSettings, TcpTransport};
//! ```

pub use tl1_client as client;
pub use tl1_core as core;
pub use tl1_transport as transport;

pub use tl1_core::{Tl1Command, Tl1Error, Tl1Result};
