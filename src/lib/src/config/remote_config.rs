use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REMOTE_HOST, DEFAULT_REMOTE_SCHEME};
use crate::error::ZenithError;

/// Base address of the remote list source.
///
/// A fixed configuration value, not runtime input. The default points at
/// the production deployment; tests point it at a local mock server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub scheme: String,
    pub host: String,
}

impl Default for RemoteConfig {
    fn default() -> RemoteConfig {
        RemoteConfig {
            scheme: String::from(DEFAULT_REMOTE_SCHEME),
            host: String::from(DEFAULT_REMOTE_HOST),
        }
    }
}

impl RemoteConfig {
    pub fn new(host: impl AsRef<str>) -> Result<RemoteConfig, ZenithError> {
        let host = host.as_ref();
        if host.is_empty() {
            return Err(ZenithError::remote_host_not_set());
        }
        Ok(RemoteConfig {
            scheme: String::from(DEFAULT_REMOTE_SCHEME),
            host: host.to_string(),
        })
    }

    /// Build a config from a full base url, e.g. `http://127.0.0.1:4000`
    pub fn from_url(url: impl AsRef<str>) -> Result<RemoteConfig, ZenithError> {
        let parsed = url::Url::parse(url.as_ref())?;
        let mut host = parsed.host_str().unwrap_or_default().to_string();
        if let Some(port) = parsed.port() {
            host = format!("{host}:{port}");
        }
        if host.is_empty() {
            return Err(ZenithError::remote_host_not_set());
        }
        Ok(RemoteConfig {
            scheme: parsed.scheme().to_string(),
            host,
        })
    }
}
