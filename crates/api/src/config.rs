//! Process configuration from environment variables.

use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "ORGAPI_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{BIND_ADDR_VAR}={raw:?} is not a socket address ({e}); using {DEFAULT_BIND_ADDR}");
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        Self { bind_addr }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
