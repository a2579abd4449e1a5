//! TL1 command text
//!
//! A TL1 instruction is a single line of ASCII text terminated by a
//! semicolon, e.g. `ACT-USER:DEVICE:USER:100::PASS;`. The client sends
//! exactly one command per run.

use crate::error::{Tl1Error, Tl1Result};
use std::fmt;

/// Terminator character of every TL1 command.
pub const TERMINATOR: char = ';';

/// The login command the reference client transmits.
///
/// Fixed at 31 bytes and independent of the `--user`/`--secret`/`--cmdcode`
/// flags, matching the reference behavior. Callers that want a real
/// substitution should build the command with [`Tl1Command::act_user`].
pub const DEFAULT_LOGIN: &str = "ACT-USER:DEVICE:USER:100::PASS;";

/// One immutable TL1 instruction.
///
/// Construction validates the terminator so the exchange engine can assume
/// a well-formed command on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tl1Command(String);

impl Tl1Command {
    /// Create a command from raw text.
    ///
    /// # Errors
    /// Returns `Tl1Error::Config` if the text is empty or does not end
    /// with the `;` terminator.
    pub fn new(text: impl Into<String>) -> Tl1Result<Self> {
        let text = text.into();
        if text.len() < 2 || !text.ends_with(TERMINATOR) {
            return Err(Tl1Error::Config(format!(
                "TL1 command must be non-empty and terminated by '{}': {:?}",
                TERMINATOR, text
            )));
        }
        Ok(Self(text))
    }

    /// The fixed reference login command.
    pub fn default_login() -> Self {
        Self(DEFAULT_LOGIN.to_string())
    }

    /// Build an ACT-USER login command from its parts.
    ///
    /// `ACT-USER:<tid>:<user>:<ctag>::<secret>;`
    pub fn act_user(tid: &str, user: &str, ctag: &str, secret: &str) -> Self {
        Self(format!("ACT-USER:{}:{}:{}::{};", tid, user, ctag, secret))
    }

    /// Command text including the terminator.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wire representation of the command.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Byte length of the command on the wire.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tl1Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
