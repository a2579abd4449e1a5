//! TCP transport implementation
//!
//! The transport holds the ordered candidate list produced by the resolver.
//! `open` walks it and keeps the first connection that succeeds; a failed
//! attempt drops its socket before the next candidate is tried, so no
//! descriptor outlives its attempt.

use crate::stream::{StreamAccessor, TransportLayer};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tl1_core::{Tl1Error, Tl1Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// TCP transport layer settings
#[derive(Debug, Clone)]
pub struct TcpSettings {
    /// Candidate addresses, tried in order.
    pub candidates: Vec<SocketAddr>,
    /// Optional bound on connect/read/write; `None` blocks indefinitely,
    /// which is the reference client's behavior.
    pub timeout: Option<Duration>,
}

impl TcpSettings {
    /// Create new TCP settings with no timeout
    pub fn new(candidates: Vec<SocketAddr>) -> Self {
        Self {
            candidates,
            timeout: None,
        }
    }

    /// Create TCP settings with a bounded timeout
    pub fn with_timeout(candidates: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self {
            candidates,
            timeout: Some(timeout),
        }
    }
}

/// TCP transport layer implementation
#[derive(Debug)]
pub struct TcpTransport {
    stream: Option<TcpStream>,
    settings: TcpSettings,
    closed: bool,
}

impl TcpTransport {
    /// Create a new TCP transport layer
    pub fn new(settings: TcpSettings) -> Self {
        Self {
            stream: None,
            settings,
            closed: true,
        }
    }

    /// Address of the candidate the transport is connected to, if any.
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.stream.as_ref().and_then(|s| s.peer_addr().ok())
    }

    async fn connect_one(addr: SocketAddr, timeout: Option<Duration>) -> std::io::Result<TcpStream> {
        match timeout {
            Some(limit) => tokio::time::timeout(limit, TcpStream::connect(addr))
                .await
                .unwrap_or_else(|_| {
                    Err(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        "connect timed out",
                    ))
                }),
            None => TcpStream::connect(addr).await,
        }
    }
}

#[async_trait]
impl TransportLayer for TcpTransport {
    /// Connect to the first candidate that accepts.
    ///
    /// Candidates are tried strictly in resolver order; once one succeeds the
    /// rest are not attempted. Exhausting the list is `Tl1Error::Connect`.
    async fn open(&mut self) -> Tl1Result<()> {
        if !self.closed {
            return Err(Tl1Error::Connect(
                "connection has already been opened".to_string(),
            ));
        }

        let mut last_failure = None;
        for addr in &self.settings.candidates {
            match Self::connect_one(*addr, self.settings.timeout).await {
                Ok(stream) => {
                    log::debug!("connected to {}", addr);
                    self.stream = Some(stream);
                    self.closed = false;
                    return Ok(());
                }
                Err(e) => {
                    log::debug!("connect to {} failed ({}), trying next candidate", addr, e);
                    last_failure = Some(format!("{}: {}", addr, e));
                }
            }
        }

        Err(Tl1Error::Connect(match last_failure {
            Some(detail) => format!(
                "all {} candidate address(es) failed, last: {}",
                self.settings.candidates.len(),
                detail
            ),
            None => "no candidate addresses to try".to_string(),
        }))
    }
}

#[async_trait]
impl StreamAccessor for TcpTransport {
    async fn set_timeout(&mut self, timeout: Option<Duration>) -> Tl1Result<()> {
        self.settings.timeout = timeout;
        Ok(())
    }

    async fn read(&mut self, buf: &mut [u8]) -> Tl1Result<usize> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            Tl1Error::Receive(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "TCP stream not connected",
            ))
        })?;

        let result = match self.settings.timeout {
            Some(limit) => tokio::time::timeout(limit, stream.read(buf))
                .await
                .map_err(|_| Tl1Error::Timeout)?
                .map_err(Tl1Error::Receive),
            None => stream.read(buf).await.map_err(Tl1Error::Receive),
        };

        match result {
            Ok(0) => {
                self.closed = true;
                Ok(0)
            }
            Ok(n) => Ok(n),
            Err(e) => {
                self.closed = true;
                Err(e)
            }
        }
    }

    async fn write(&mut self, buf: &[u8]) -> Tl1Result<usize> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            Tl1Error::Send(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "TCP stream not connected",
            ))
        })?;

        match self.settings.timeout {
            Some(limit) => tokio::time::timeout(limit, stream.write(buf))
                .await
                .map_err(|_| Tl1Error::Timeout)?
                .map_err(Tl1Error::Send),
            None => stream.write(buf).await.map_err(Tl1Error::Send),
        }
    }

    async fn flush(&mut self) -> Tl1Result<()> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            Tl1Error::Send(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "TCP stream not connected",
            ))
        })?;

        stream.flush().await.map_err(Tl1Error::Send)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    async fn close(&mut self) -> Tl1Result<()> {
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.shutdown().await;
        }
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn listener() -> (TcpListener, SocketAddr) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        (listener, addr)
    }

    /// An address with nothing listening behind it.
    async fn dead_addr() -> SocketAddr {
        let (listener, addr) = listener().await;
        drop(listener);
        addr
    }

    #[tokio::test]
    async fn test_tcp_settings() {
        let addr: SocketAddr = "127.0.0.1:2025".parse().unwrap();
        let settings = TcpSettings::new(vec![addr]);
        assert_eq!(settings.candidates, vec![addr]);
        assert!(settings.timeout.is_none());

        let bounded = TcpSettings::with_timeout(vec![addr], Duration::from_secs(5));
        assert!(bounded.timeout.is_some());
    }

    #[tokio::test]
    async fn test_open_connects_to_first_live_candidate() {
        let (first, first_addr) = listener().await;
        let (_second, second_addr) = listener().await;

        let mut transport = TcpTransport::new(TcpSettings::new(vec![first_addr, second_addr]));
        transport.open().await.unwrap();

        // First candidate wins; the accept on it must complete.
        let (_peer, _) = first.accept().await.unwrap();
        assert!(!transport.is_closed());
        assert_eq!(transport.peer_addr(), Some(first_addr));

        transport.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_open_skips_failed_candidate() {
        let dead = dead_addr().await;
        let (live, live_addr) = listener().await;

        let mut transport = TcpTransport::new(TcpSettings::new(vec![dead, live_addr]));
        transport.open().await.unwrap();

        let (_peer, _) = live.accept().await.unwrap();
        assert_eq!(transport.peer_addr(), Some(live_addr));

        transport.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_open_fails_when_candidates_exhausted() {
        let dead = dead_addr().await;

        let mut transport = TcpTransport::new(TcpSettings::new(vec![dead]));
        let err = transport.open().await.unwrap_err();
        assert!(matches!(err, Tl1Error::Connect(_)));
        assert!(transport.is_closed());
    }

    #[tokio::test]
    async fn test_open_fails_with_no_candidates() {
        let mut transport = TcpTransport::new(TcpSettings::new(vec![]));
        let err = transport.open().await.unwrap_err();
        assert!(matches!(err, Tl1Error::Connect(_)));
    }

    #[tokio::test]
    async fn test_reopen_rejected_while_open() {
        let (_live, live_addr) = listener().await;

        let mut transport = TcpTransport::new(TcpSettings::new(vec![live_addr]));
        transport.open().await.unwrap();
        assert!(matches!(transport.open().await, Err(Tl1Error::Connect(_))));

        transport.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let (_live, live_addr) = listener().await;

        let mut transport = TcpTransport::new(TcpSettings::new(vec![live_addr]));
        transport.open().await.unwrap();
        transport.close().await.unwrap();
        transport.close().await.unwrap();
        assert!(transport.is_closed());
    }

    #[tokio::test]
    async fn test_read_after_peer_close_returns_zero() {
        let (live, live_addr) = listener().await;

        let mut transport = TcpTransport::new(TcpSettings::new(vec![live_addr]));
        transport.open().await.unwrap();

        let (peer, _) = live.accept().await.unwrap();
        drop(peer);

        let mut buf = [0u8; 64];
        let n = transport.read(&mut buf).await.unwrap();
        assert_eq!(n, 0);
        assert!(transport.is_closed());
    }
}
