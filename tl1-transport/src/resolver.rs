//! Name resolution for TL1 endpoints
//!
//! Turns a host name or literal address plus a numeric port into the ordered
//! candidate list the connector walks. Resolution is family-agnostic: the
//! candidates may mix IPv4 and IPv6 addresses, in the order the name service
//! returned them.

use std::net::SocketAddr;
use tl1_core::{Tl1Error, Tl1Result};
use tokio::net::lookup_host;

/// Resolve a host/port endpoint into candidate socket addresses.
///
/// # Errors
/// Returns `Tl1Error::Resolution` if the name service reports an error or
/// yields no candidates. Resolution failure is fatal; the caller never
/// retries it.
pub async fn resolve(host: &str, port: u16) -> Tl1Result<Vec<SocketAddr>> {
    let candidates: Vec<SocketAddr> = lookup_host((host, port))
        .await
        .map_err(|e| Tl1Error::Resolution(format!("{}:{}: {}", host, port, e)))?
        .collect();

    if candidates.is_empty() {
        return Err(Tl1Error::Resolution(format!(
            "{}:{}: no addresses found",
            host, port
        )));
    }

    log::debug!("resolved {}:{} to {} candidate(s)", host, port, candidates.len());
    Ok(candidates)
}
