//! Runtime configuration, read once from the environment at start-up.

use crate::error::{CafeError, Result};
use std::net::SocketAddr;
use std::str::FromStr;

/// Base URL of the API gateway when `CAFE_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
/// Listen address when `CAFE_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Where the menu comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuSource {
    /// Fixed built-in list, no network.
    Static,
    /// Catalog endpoint, falling back to the built-in list on failure.
    #[default]
    Remote,
}

impl FromStr for MenuSource {
    type Err = CafeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "remote" => Ok(Self::Remote),
            other => Err(CafeError::config(format!(
                "unknown menu source '{}' (expected 'static' or 'remote')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CafeConfig {
    /// Gateway base URL, without trailing slash
    pub api_base: String,
    pub menu_source: MenuSource,
    pub bind_addr: SocketAddr,
}

impl CafeConfig {
    /// Reads `CAFE_API_BASE`, `CAFE_MENU_SOURCE` and `CAFE_BIND_ADDR`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base = get("CAFE_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let menu_source = match get("CAFE_MENU_SOURCE") {
            Some(raw) => raw.parse()?,
            None => MenuSource::default(),
        };

        let raw_addr = get("CAFE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| CafeError::config(format!("invalid bind address '{}': {}", raw_addr, e)))?;

        Ok(Self {
            api_base,
            menu_source,
            bind_addr,
        })
    }
}
