//! `shopfront-core` — shared building blocks for the storefront crates.
//!
//! Pure primitives only (no HTTP, no IO beyond reading configuration values
//! handed in by the caller).

pub mod base_url;
pub mod error;

pub use base_url::{BaseUrl, BaseUrlPolicy, DEFAULT_BASE_URL};
pub use error::{DomainError, DomainResult};
