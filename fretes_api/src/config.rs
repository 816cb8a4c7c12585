use std::{net::SocketAddr, path::PathBuf};

use fretes_routing::config::RoutingConfig;

const BIND_ADDR_ENV_VAR: &str = "FRETES_BIND_ADDR";
const RATE_TABLE_ENV_VAR: &str = "FRETES_RATE_TABLE";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Replaces the embedded rate table when set.
    pub rate_table: Option<PathBuf>,
    pub routing: RoutingConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_ENV_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());

        Ok(ApiConfig {
            bind_addr: bind_addr
                .parse()
                .map_err(|error| anyhow::anyhow!("{BIND_ADDR_ENV_VAR}: {error}"))?,
            rate_table: lookup(RATE_TABLE_ENV_VAR).map(PathBuf::from),
            routing: RoutingConfig::from_lookup(&lookup)?,
        })
    }
}
