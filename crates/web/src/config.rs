//! Process configuration read from the environment at startup.

use std::net::SocketAddr;

use shopfront_core::{BaseUrl, BaseUrlPolicy, DomainResult};

pub const BASE_URL_VAR: &str = "PUBLIC_BASE_URL";
pub const REQUIRE_BASE_URL_VAR: &str = "REQUIRE_BASE_URL";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub base_url: BaseUrl,
    pub bind_addr: SocketAddr,
}

impl WebConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let policy = match lookup(REQUIRE_BASE_URL_VAR).as_deref().map(parse_flag) {
            Some(Some(true)) => BaseUrlPolicy::Required,
            Some(Some(false)) | None => BaseUrlPolicy::Fallback,
            Some(None) => {
                tracing::warn!("{REQUIRE_BASE_URL_VAR} is not a boolean; treating as false");
                BaseUrlPolicy::Fallback
            }
        };

        let base_url = BaseUrl::resolve(lookup(BASE_URL_VAR).as_deref(), policy)?;

        let bind_addr = lookup(BIND_ADDR_VAR)
            .and_then(|raw| match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!("invalid {BIND_ADDR_VAR} {raw:?} ({e}); using {DEFAULT_BIND_ADDR}");
                    None
                }
            })
            .unwrap_or_else(default_bind_addr);

        Ok(Self { base_url, bind_addr })
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
