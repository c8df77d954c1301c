//! Web host: configuration, routing, and HTML/XML rendering of the SEO pages.

pub mod app;
pub mod config;
