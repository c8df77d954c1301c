use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult};

/// Stock state, mirrored onto schema.org's `ItemAvailability` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    InStock,
    OutOfStock,
    PreOrder,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "InStock",
            Availability::OutOfStock => "OutOfStock",
            Availability::PreOrder => "PreOrder",
        }
    }

    /// `https://schema.org/<Variant>`.
    pub fn schema_url(&self) -> String {
        format!("https://schema.org/{}", self.as_str())
    }
}

impl core::fmt::Display for Availability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price in the currency's smallest unit (e.g. cents).
///
/// Displays as a two-decimal string (`19999` -> `"199.99"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    pub fn from_minor(amount: u64) -> Self {
        Self(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Average rating together with the number of reviews it was computed from.
///
/// Both values exist together or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateRating {
    pub value: f64,
    pub review_count: u32,
}

pub const MAX_RATING: f64 = 5.0;

/// Catalog record. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Vec<String>,
    pub price: Price,
    pub currency: String, // ISO 4217 code (e.g. "USD")
    pub image: String,    // site-relative path
    pub availability: Availability,
    pub brand: String,
    pub sku: String,
    pub rating: Option<AggregateRating>,
}

impl Product {
    /// Site path of the detail page (`/products/<id>`).
    pub fn path(&self) -> String {
        product_path(&self.id)
    }

    /// Categories joined the way schema.org `category` expects them.
    pub fn category_label(&self) -> String {
        self.category.join(", ")
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::validation("product id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!("product {}: name must not be empty", self.id)));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation(format!("product {}: sku must not be empty", self.id)));
        }
        if self.currency.len() != 3 || !self.currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "product {}: currency must be a three-letter code, got {:?}",
                self.id, self.currency
            )));
        }
        if let Some(rating) = &self.rating {
            if !rating.value.is_finite() || !(0.0..=MAX_RATING).contains(&rating.value) {
                return Err(DomainError::validation(format!(
                    "product {}: rating must be within 0..={MAX_RATING}",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

/// Site path for a product id, percent-encoding the id segment.
pub fn product_path(id: &str) -> String {
    format!("/products/{}", urlencoding::encode(id))
}
