use thiserror::Error;

/// Process exit status for log-file failures, distinct from the generic
/// failure status so operators can tell a broken log path from a broken peer.
pub const EXIT_LOG_FAILURE: i32 = 8;

/// Process exit status for every other fatal error.
pub const EXIT_FAILURE: i32 = 1;

/// Main error type for TL1 client operations
///
/// Every variant is fatal: the client performs no internal recovery or retry.
/// An error propagates to the entry point, is reported as a one-line
/// diagnostic, and terminates the process with a non-zero status.
#[derive(Error, Debug)]
pub enum Tl1Error {
    #[error("bad or missing configuration: {0}")]
    Config(String),

    #[error("name resolution failed: {0}")]
    Resolution(String),

    #[error("connect failed: {0}")]
    Connect(String),

    #[error("send failed: {0}")]
    Send(std::io::Error),

    #[error("recv failed: {0}")]
    Receive(std::io::Error),

    #[error("connection closed prematurely by peer")]
    PrematureClose,

    #[error("unable to write to log file: {0}")]
    LogIo(std::io::Error),

    #[error("operation timed out")]
    Timeout,
}

impl Tl1Error {
    /// Short category tag used in operator diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Tl1Error::Config(_) => "config",
            Tl1Error::Resolution(_) => "resolve",
            Tl1Error::Connect(_) => "connect",
            Tl1Error::Send(_) => "send",
            Tl1Error::Receive(_) | Tl1Error::PrematureClose => "recv",
            Tl1Error::LogIo(_) => "log",
            Tl1Error::Timeout => "timeout",
        }
    }

    /// Exit status the process terminates with when this error is fatal.
    ///
    /// Log-file failures exit with [`EXIT_LOG_FAILURE`]; everything else
    /// with [`EXIT_FAILURE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            Tl1Error::LogIo(_) => EXIT_LOG_FAILURE,
            _ => EXIT_FAILURE,
        }
    }

    /// Render the one-line operator diagnostic: `<origin> ::: <category> => <detail>`.
    pub fn diagnostic(&self, origin: &str) -> String {
        format!("{} ::: {} => {}", origin, self.category(), self)
    }
}

/// Result type alias for TL1 client operations
pub type Tl1Result<T> = Result<T, Tl1Error>;
