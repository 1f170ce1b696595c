use crate::{Error, DEFAULT_REQUEST_TIMEOUT};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tonic::codegen::http::Uri;

/// Environment variables are read with this prefix, e.g. `ZEEBE_GATEWAY_ADDRESS`.
pub const ENV_PREFIX: &str = "ZEEBE_";
pub const DEFAULT_GATEWAY_ADDRESS: &str = "127.0.0.1:26500";

/// Connection settings for a `Client`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host:port`, optionally with an `http://` or `https://` scheme
    #[serde(default = "default_gateway_address")]
    pub gateway_address: String,
    /// bounds every call made through the client
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// selects `https` when the address carries no scheme
    #[serde(default)]
    pub use_tls: bool,
    /// PEM encoded certificate authority to trust for TLS connections
    #[serde(default)]
    pub ca_certificate_path: Option<PathBuf>,
}

fn default_gateway_address() -> String {
    DEFAULT_GATEWAY_ADDRESS.to_string()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_millis() as u64
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            gateway_address: default_gateway_address(),
            request_timeout_ms: default_request_timeout_ms(),
            use_tls: false,
            ca_certificate_path: None,
        }
    }
}

impl ClientConfig {
    /// Read the configuration from `ZEEBE_`-prefixed environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Ok(envy::prefixed(ENV_PREFIX).from_env()?)
    }

    /// Read the configuration from `ZEEBE_`-prefixed key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// The gateway address as a URI. An address without a scheme gets `https` when `use_tls` is
    /// set and `http` otherwise.
    pub fn gateway_uri(&self) -> Result<Uri, Error> {
        let address = self.gateway_address.trim();
        let uri = if address.contains("://") {
            address.parse::<Uri>()?
        } else {
            let scheme = if self.use_tls { "https" } else { "http" };
            format!("{}://{}", scheme, address).parse::<Uri>()?
        };
        Ok(uri)
    }
}
