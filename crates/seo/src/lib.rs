//! SEO building blocks: per-route metadata, JSON-LD structured data, and the
//! sitemap.
//!
//! Everything here is a pure function of the catalog and the [`BaseUrl`];
//! rendering to HTML/XML text is left to the web crate (except the sitemap
//! document, which has exactly one serialization).
//!
//! [`BaseUrl`]: shopfront_core::BaseUrl

pub mod metadata;
pub mod site;
pub mod sitemap;
pub mod structured_data;

pub use metadata::{Metadata, ResolvedMetadata, SiteLayout};
pub use sitemap::{ChangeFrequency, SitemapEntry};
pub use structured_data::{JsonLd, StructuredData};
