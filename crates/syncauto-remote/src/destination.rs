//! Destination parsing
//!
//! A destination is written as `<remoteType>:<remotePath>`, e.g. `gdrive:backup`.

use std::fmt;
use std::str::FromStr;

/// Separator between the remote type and the remote path
pub const SEPARATOR: char = ':';

/// A parsed sync target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Destination {
    pub remote_type: String,
    pub remote_path: String,
}

/// A raw destination string that is not `<type>:<path>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid destination format in config: {raw}")]
pub struct DestinationError {
    pub raw: String,
}

impl Destination {
    pub fn new(remote_type: impl Into<String>, remote_path: impl Into<String>) -> Self {
        Self {
            remote_type: remote_type.into(),
            remote_path: remote_path.into(),
        }
    }

    /// Parse `<remoteType>:<remotePath>`.
    ///
    /// Exactly one separator with non-empty text on both sides is required.
    pub fn parse(raw: &str) -> Result<Self, DestinationError> {
        let invalid = || DestinationError {
            raw: raw.to_string(),
        };

        let mut parts = raw.split(SEPARATOR);
        let (Some(remote_type), Some(remote_path), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if remote_type.is_empty() || remote_path.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(remote_type, remote_path))
    }
}

impl FromStr for Destination {
    type Err = DestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.remote_type, SEPARATOR, self.remote_path)
    }
}
