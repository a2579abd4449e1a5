//! Stream accessor trait for the transport layer

use async_trait::async_trait;
use std::time::Duration;
use tl1_core::Tl1Result;

/// Stream accessor interface to access a byte stream to a remote network element
#[async_trait]
pub trait StreamAccessor: Send + Sync {
    /// Set the read/write timeout
    ///
    /// # Arguments
    ///
    /// * `timeout` - The timeout duration. None means infinite timeout.
    async fn set_timeout(&mut self, timeout: Option<Duration>) -> Tl1Result<()>;

    /// Read data from the stream
    ///
    /// # Returns
    ///
    /// Number of bytes read, or 0 if the peer closed the stream
    async fn read(&mut self, buf: &mut [u8]) -> Tl1Result<usize>;

    /// Write data to the stream
    ///
    /// # Returns
    ///
    /// Number of bytes written, which may be fewer than `buf.len()`
    async fn write(&mut self, buf: &[u8]) -> Tl1Result<usize>;

    /// Flush any buffered data
    async fn flush(&mut self) -> Tl1Result<()>;

    /// Check if the stream is closed
    fn is_closed(&self) -> bool;

    /// Close the stream
    ///
    /// Closing an already-closed stream is a no-op.
    async fn close(&mut self) -> Tl1Result<()>;
}

/// Transport layer trait that extends StreamAccessor
#[async_trait]
pub trait TransportLayer: StreamAccessor {
    /// Open the physical layer connection
    async fn open(&mut self) -> Tl1Result<()>;
}
