//! Public base URL of the deployment.
//!
//! Every absolute URL the site emits (canonical links, Open Graph urls,
//! JSON-LD ids, sitemap locations) is built by joining a path onto a
//! [`BaseUrl`].

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// How a missing base URL is treated at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseUrlPolicy {
    /// Fall back to [`DEFAULT_BASE_URL`].
    #[default]
    Fallback,
    /// Refuse to start without an explicit value.
    Required,
}

/// Absolute base URL.
///
/// Always starts with `http://` or `https://` and never ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Normalize an optional configured value. Total: never fails.
    pub fn normalize(raw: Option<&str>) -> Self {
        Self::try_normalize(raw).unwrap_or_else(|| {
            if let Some(value) = raw.filter(|s| !s.trim().is_empty()) {
                tracing::warn!(value, "base url has no host; using default");
            }
            Self::default()
        })
    }

    /// `None` when the value is absent, blank, or has no host.
    pub fn try_normalize(raw: Option<&str>) -> Option<Self> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;

        let (scheme, rest) = split_scheme(raw);
        let rest = rest.trim_end_matches('/');
        if rest.is_empty() {
            return None;
        }

        Some(Self(format!("{scheme}{rest}")))
    }

    /// Resolve a configured value under the given policy.
    ///
    /// A value without a usable host counts as missing.
    pub fn resolve(raw: Option<&str>, policy: BaseUrlPolicy) -> DomainResult<Self> {
        match (Self::try_normalize(raw), policy) {
            (Some(base), _) => Ok(base),
            (None, BaseUrlPolicy::Required) => {
                Err(DomainError::missing_config("PUBLIC_BASE_URL"))
            }
            (None, BaseUrlPolicy::Fallback) => {
                tracing::warn!(value = ?raw, "PUBLIC_BASE_URL not usable; using {DEFAULT_BASE_URL}");
                Ok(Self::default())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL for a site path (`"/products"`, `"products/1"`, ...).
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.0.clone()
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl core::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split off a recognized scheme (case-insensitive, returned lowercased).
/// Values without one get `https://`.
fn split_scheme(raw: &str) -> (&'static str, &str) {
    for scheme in SCHEMES {
        if raw.len() >= scheme.len()
            && raw.is_char_boundary(scheme.len())
            && raw[..scheme.len()].eq_ignore_ascii_case(scheme)
        {
            return (scheme, &raw[scheme.len()..]);
        }
    }
    ("https://", raw)
}
