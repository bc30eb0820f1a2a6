//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_parse, env_var};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables.
    ///
    /// `SERVER_ADDRESS` in `host:port` form (a bare `:port` binds every
    /// interface) takes precedence over `SERVER_HOST` / `SERVER_PORT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let (host, port) = env_var("SERVER_ADDRESS")
            .and_then(|address| parse_address(&address))
            .unwrap_or_else(|| {
                (
                    env_var("SERVER_HOST").unwrap_or(defaults.host.clone()),
                    env_parse("SERVER_PORT", defaults.port),
                )
            });

        Self {
            host,
            port,
            workers: env_parse("SERVER_WORKERS", 0),
            shutdown_timeout: env_parse("SHUTDOWN_TIMEOUT", default_shutdown_timeout()),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_address(address: &str) -> Option<(String, u16)> {
    let (host, port) = address.trim().rsplit_once(':')?;
    let port = port.parse().ok()?;
    let host = if host.is_empty() { "0.0.0.0" } else { host };
    Some((host.to_string(), port))
}

fn default_shutdown_timeout() -> u64 {
    5
}
