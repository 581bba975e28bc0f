//! Startup and serving failures for the host binary.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
