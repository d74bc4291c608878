//! Server configuration loaded from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `POSTBOX_HOST` | `0.0.0.0` |
//! | `POSTBOX_PORT` | `3000` |
//!
//! The binary calls `dotenvy::dotenv()` first, so a `.env` file in the
//! working directory can supply either value.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Environment variable naming the listen address.
pub const HOST_VAR: &str = "POSTBOX_HOST";
/// Environment variable naming the listen port.
pub const PORT_VAR: &str = "POSTBOX_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The host is not an IP address.
    #[error("POSTBOX_HOST is not a valid IP address: {value:?}")]
    InvalidHost {
        /// Offending value.
        value: String,
    },
    /// The port is not an integer in `0..=65535`.
    #[error("POSTBOX_PORT is not a valid port: {value:?}")]
    InvalidPort {
        /// Offending value.
        value: String,
    },
}

/// Listen address for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    host: IpAddr,
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use postbox::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_lookup(|key| {
    ///     (key == "POSTBOX_PORT").then(|| "8080".to_owned())
    /// })
    /// .expect("valid port");
    /// assert_eq!(config.port(), 8080);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match non_blank(lookup(HOST_VAR)) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value })?,
            None => DEFAULT_HOST,
        };
        let port = match non_blank(lookup(PORT_VAR)) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Returns the configured host.
    #[must_use]
    pub const fn host(&self) -> IpAddr {
        self.host
    }

    /// Returns the configured port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}
