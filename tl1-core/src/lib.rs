//! Core types and utilities for the TL1 client
//!
//! This crate provides the error taxonomy and the TL1 command type shared
//! by the transport and client crates.

pub mod command;
pub mod error;

pub use command::{DEFAULT_LOGIN, TERMINATOR, Tl1Command};
pub use error::{EXIT_FAILURE, EXIT_LOG_FAILURE, Tl1Error, Tl1Result};
