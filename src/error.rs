use std::io;
use std::net::AddrParseError;

use thiserror::Error;

/// Environment configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Server startup and runtime failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
