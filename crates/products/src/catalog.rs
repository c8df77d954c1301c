use std::collections::HashSet;
use std::sync::Arc;

use shopfront_core::{DomainError, DomainResult};

use crate::product::Product;
use crate::seed;

/// Read-only product lookups used by the page builders.
pub trait ProductCatalog: Send + Sync {
    /// All products, in catalog order.
    fn list_all(&self) -> &[Product];

    /// Exact-match lookup by identifier.
    fn find_by_id(&self, id: &str) -> Option<&Product>;
}

impl<C> ProductCatalog for Arc<C>
where
    C: ProductCatalog + ?Sized,
{
    fn list_all(&self) -> &[Product] {
        (**self).list_all()
    }

    fn find_by_id(&self, id: &str) -> Option<&Product> {
        (**self).find_by_id(id)
    }
}

/// Fixed in-memory catalog. Insertion order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Build a catalog, validating each record and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(DomainError::duplicate_id(product.id.clone()));
            }
        }
        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// The built-in reference catalog (four products, ids "1" to "4"),
    /// validated like any other.
    pub fn reference() -> DomainResult<Self> {
        Self::new(seed::reference_products())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn list_all(&self) -> &[Product] {
        &self.products
    }

    fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
