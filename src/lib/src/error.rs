//! Errors for the zenith library
//!
//! Enumeration for all errors that can occur in the zenith library
//!

use derive_more::{Display, Error};
use std::io;

#[derive(Debug, Display, Error)]
pub enum ZenithError {
    // Remote endpoint misconfiguration, fatal to the operation only
    Config(#[error(not(source))] String),

    // Log list retrieval failed, recoverable via retry
    Fetch(#[error(not(source))] String),

    // External Library Errors
    IO(io::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),

    // Fallback
    Basic(#[error(not(source))] String),
}

impl ZenithError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        ZenithError::Basic(s.as_ref().to_string())
    }

    pub fn config(s: impl AsRef<str>) -> Self {
        ZenithError::Config(s.as_ref().to_string())
    }

    pub fn fetch(s: impl AsRef<str>) -> Self {
        ZenithError::Fetch(s.as_ref().to_string())
    }

    pub fn remote_host_not_set() -> Self {
        ZenithError::config("Remote host not set, configure one with RemoteConfig::new(host)")
    }
}

impl From<io::Error> for ZenithError {
    fn from(error: io::Error) -> Self {
        ZenithError::IO(error)
    }
}

impl From<url::ParseError> for ZenithError {
    fn from(error: url::ParseError) -> Self {
        ZenithError::URL(error)
    }
}

impl From<serde_json::Error> for ZenithError {
    fn from(error: serde_json::Error) -> Self {
        ZenithError::JSON(error)
    }
}

impl From<reqwest::Error> for ZenithError {
    fn from(error: reqwest::Error) -> Self {
        ZenithError::HTTP(error)
    }
}
