//! TL1 client implementation
//!
//! This crate ties the transport layer to the single-command exchange:
//! resolve the endpoint, connect to the first candidate that accepts, send
//! one TL1 command, collect the reply, close the connection. Every failure
//! along that path is fatal; there is no retry or reconnect.

pub mod config;
pub mod exchange;
pub mod lifecycle;
#[cfg(unix)]
pub mod signal;

use bytes::BytesMut;
use config::Config;
use exchange::ExchangeEngine;
use tl1_core::{Tl1Command, Tl1Result};
use tl1_transport::{TcpSettings, TcpTransport, TransportLayer, resolve};

pub const APP_NAME: &str = "tl1client";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one complete exchange against the configured endpoint.
///
/// Resolution, connection, send, and receive are strictly sequential; at
/// most one connection exists for the run and it is closed exactly once,
/// whether the exchange completed or aborted.
///
/// The command on the wire is the fixed reference login, and the receive
/// threshold is that command's length — both reference behaviors kept
/// deliberately (see DESIGN.md).
///
/// # Returns
/// The accumulated reply bytes in arrival order.
pub async fn run(config: &Config) -> Tl1Result<BytesMut> {
    let candidates = resolve(&config.host, config.port).await?;

    let mut transport = TcpTransport::new(TcpSettings::new(candidates));
    transport.open().await?;
    log::info!(
        "connected to {}",
        transport
            .peer_addr()
            .map_or_else(|| "peer".to_string(), |a| a.to_string())
    );

    let command = Tl1Command::default_login();
    let threshold = command.len();

    let mut engine = ExchangeEngine::new(transport);
    let exchanged = async {
        engine.send(&command).await?;
        engine.receive(threshold).await
    }
    .await;

    let closed = engine.close().await;
    let response = exchanged?;
    closed?;

    log::info!("exchange complete, {} byte reply", response.len());
    Ok(response)
}
