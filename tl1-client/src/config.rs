//! CLI configuration
//!
//! All flags are collected into one immutable structure at startup and
//! passed by reference into the core; nothing mutates it afterwards.

use clap::Parser;
use std::path::PathBuf;

/// Lowest port the client will talk to. TL1 interfaces historically sit on
/// telnet-adjacent ports; anything below 23 is rejected at parse time.
pub const MIN_PORT: u16 = 23;

/// Transaction Language 1 (TL1) client
#[derive(Parser, Debug, Clone)]
#[command(name = "tl1client", version, about = "Transaction Language 1 (TL1) Client")]
pub struct Config {
    /// Network element host name or literal address
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// TCP port of the TL1 interface (23-65535)
    #[arg(long, value_parser = parse_port)]
    pub port: u16,

    /// TL1 user name
    #[arg(long, default_value = "root")]
    pub user: String,

    /// TL1 user secret
    #[arg(long, default_value = "password")]
    pub secret: String,

    /// TL1 correlation tag code
    #[arg(long, default_value = "0001")]
    pub cmdcode: String,

    /// Output format
    #[arg(long, default_value = "txt")]
    pub format: String,

    /// Lifecycle log file path
    #[arg(long)]
    pub log: PathBuf,

    /// Enable debug output
    #[arg(long)]
    pub verbose: bool,
}

fn parse_port(value: &str) -> Result<u16, String> {
    let port: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid port number", value))?;
    if port < u32::from(MIN_PORT) || port > u32::from(u16::MAX) {
        return Err(format!("--port MUST be between {} and {}", MIN_PORT, u16::MAX));
    }
    Ok(port as u16)
}
