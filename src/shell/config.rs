// Runtime configuration read from the environment.
//
// Variables
// - EVENTS_BIND_ADDR: socket address the HTTP server binds to.
// - EVENTS_COLLECTION: store collection holding the event records.
// - EVENTS_LOG: fallback tracing filter when RUST_LOG is unset.

use anyhow::{Context, bail};
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_COLLECTION: &str = "events";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub collection: String,
    pub log_filter: String,
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("EVENTS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("EVENTS_BIND_ADDR is not a socket address: {bind_addr}"))?;

        let collection = lookup("EVENTS_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.into());
        if collection.trim().is_empty() {
            bail!("EVENTS_COLLECTION must not be empty");
        }

        let log_filter = lookup("EVENTS_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Ok(Self {
            bind_addr,
            collection,
            log_filter,
        })
    }
}
