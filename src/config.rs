//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const BIND_VAR: &str = "THERMONITOR_BIND";
pub const ASSETS_VAR: &str = "THERMONITOR_ASSETS";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_ASSETS: &str = "public/assets";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "thermonitor_web=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_raw = get(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: BIND_VAR,
                value: bind_raw.clone(),
                source,
            })?;

        let assets_dir = get(ASSETS_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS));

        Ok(Self { bind, assets_dir })
    }
}
