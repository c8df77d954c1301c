//! Product catalog.
//!
//! A fixed, immutable list of product records and the lookups the page
//! builders depend on. No IO, no HTTP, no storage.

pub mod catalog;
pub mod product;
mod seed;

pub use catalog::{InMemoryCatalog, ProductCatalog};
pub use product::{product_path, AggregateRating, Availability, Price, Product};
