//! Single-command exchange engine
//!
//! Sends one TL1 command over an established transport and collects the
//! reply into an accumulating buffer. The engine owns the transport for the
//! duration of the exchange; the client never reuses a connection for a
//! second command.

use bytes::BytesMut;
use tl1_core::{Tl1Command, Tl1Error, Tl1Result};
use tl1_transport::StreamAccessor;

/// Size of the fixed read chunk the receive loop fills.
pub const READ_CHUNK_SIZE: usize = 4096;

/// Exchange engine over an established transport
pub struct ExchangeEngine<T: StreamAccessor> {
    transport: T,
}

impl<T: StreamAccessor> ExchangeEngine<T> {
    /// Take ownership of an open transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Write the whole command in one shot.
    ///
    /// There is no partial-write retry loop: a write that covers fewer bytes
    /// than the command, like a failed write, is `Tl1Error::Send` and fatal.
    ///
    /// # Returns
    /// The number of bytes written (always the full command length on
    /// success).
    pub async fn send(&mut self, command: &Tl1Command) -> Tl1Result<usize> {
        let sent = self.transport.write(command.as_bytes()).await?;
        if sent < command.len() {
            return Err(Tl1Error::Send(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                format!("short write: {} of {} bytes", sent, command.len()),
            )));
        }
        self.transport.flush().await?;
        log::debug!("sent {} byte command", sent);
        Ok(sent)
    }

    /// Read until the cumulative byte count reaches `threshold`.
    ///
    /// The reply is appended chunk by chunk in arrival order; the loop exits
    /// as soon as the total reaches or passes the threshold, so the buffer
    /// may extend past it by whatever the final chunk carried.
    ///
    /// The reference client sets the threshold to the *sent command's*
    /// length rather than an expected reply length. That behavior is kept by
    /// the binary for compatibility, and it is hazardous: a reply shorter
    /// than the threshold leaves the loop blocked on a connection that will
    /// deliver no more data. Callers wanting a defensible bound should pass
    /// their own threshold.
    ///
    /// # Errors
    /// A zero-byte read before the threshold is reached means the peer
    /// closed early: `Tl1Error::PrematureClose`, never a silently short
    /// buffer. A failed read is `Tl1Error::Receive`.
    pub async fn receive(&mut self, threshold: usize) -> Tl1Result<BytesMut> {
        let mut response = BytesMut::with_capacity(READ_CHUNK_SIZE);
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        while response.len() < threshold {
            let received = self.transport.read(&mut chunk).await?;
            if received == 0 {
                return Err(Tl1Error::PrematureClose);
            }
            response.extend_from_slice(&chunk[..received]);
            log::debug!("received chunk of {} bytes, {} total", received, response.len());
        }

        Ok(response)
    }

    /// Close the underlying transport.
    pub async fn close(&mut self) -> Tl1Result<()> {
        self.transport.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tl1_core::command::DEFAULT_LOGIN;
    use tl1_transport::{TcpSettings, TcpTransport, TransportLayer};
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    async fn connected_pair() -> (ExchangeEngine<TcpTransport>, tokio::net::TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();

        let mut transport = TcpTransport::new(TcpSettings::new(vec![addr]));
        transport.open().await.unwrap();
        let (peer, _) = listener.accept().await.unwrap();

        (ExchangeEngine::new(transport), peer)
    }

    #[tokio::test]
    async fn test_send_reports_full_command_length() {
        let (mut engine, _peer) = connected_pair().await;
        let command = Tl1Command::default_login();
        let sent = engine.send(&command).await.unwrap();
        assert_eq!(sent, 31);
        engine.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_receive_echoed_login_at_threshold() {
        let (mut engine, mut peer) = connected_pair().await;

        let command = Tl1Command::default_login();
        engine.send(&command).await.unwrap();
        peer.write_all(DEFAULT_LOGIN.as_bytes()).await.unwrap();

        let response = engine.receive(command.len()).await.unwrap();
        assert_eq!(&response[..], DEFAULT_LOGIN.as_bytes());
        engine.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_receive_concatenates_chunks_in_arrival_order() {
        let (mut engine, mut peer) = connected_pair().await;

        tokio::spawn(async move {
            peer.write_all(b"HELLO").await.unwrap();
            peer.flush().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            peer.write_all(b"WORLD").await.unwrap();
        });

        let response = engine.receive(10).await.unwrap();
        assert_eq!(&response[..], b"HELLOWORLD");
        engine.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_receive_premature_close_without_data() {
        let (mut engine, peer) = connected_pair().await;
        drop(peer);

        let err = engine.receive(31).await.unwrap_err();
        assert!(matches!(err, Tl1Error::PrematureClose));
        engine.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_receive_premature_close_below_threshold() {
        let (mut engine, mut peer) = connected_pair().await;

        peer.write_all(b"DENY;").await.unwrap();
        drop(peer);

        // A short reply must surface as an error, not a short buffer.
        let err = engine.receive(31).await.unwrap_err();
        assert!(matches!(err, Tl1Error::PrematureClose));
        engine.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_zero_threshold_returns_without_reading() {
        let (mut engine, _peer) = connected_pair().await;
        let response = engine.receive(0).await.unwrap();
        assert!(response.is_empty());
        engine.close().await.unwrap();
    }
}
