//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: default 3000
//! - `BIND_ADDR`: default `0.0.0.0`
//!
//! Log filtering (`RUST_LOG`) is read by the tracing subscriber directly, and
//! Leptos site options come from `[package.metadata.leptos]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build config from an arbitrary variable source. Blank values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let read = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let port = match read("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| HostError::InvalidEnv { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match read("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| HostError::InvalidEnv { var: "BIND_ADDR", value: raw })?,
            None => DEFAULT_BIND_ADDR,
        };

        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
