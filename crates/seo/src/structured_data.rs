//! JSON-LD structured data (schema.org vocabulary).
//!
//! Builders return plain serde trees. Serialization is standard JSON; making
//! the text safe to embed inside a `<script>` element is the renderer's job.

use serde::Serialize;

use shopfront_core::BaseUrl;
use shopfront_products::{Product, ProductCatalog};

use crate::site::{LISTING_PATH, LOGO_PATH, SITE_DESCRIPTION, SITE_NAME};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Top-level JSON-LD document: `@context` plus the typed node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonLd<T> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(flatten)]
    pub node: T,
}

impl<T> JsonLd<T> {
    pub fn new(node: T) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            node,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub logo: String,
    pub description: String,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brand {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub price: String,
    pub price_currency: String,
    pub availability: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRatingNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub rating_value: f64,
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub image: String,
    pub brand: Brand,
    pub sku: String,
    pub offers: Offer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRatingNode>,
}

/// Minimal product reference used inside item lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductStub {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem<T> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: u32,
    pub item: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub number_of_items: usize,
    pub item_list_element: Vec<ListItem<ProductStub>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub main_entity: ItemList,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crumb {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: u32,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<Crumb>,
}

/// Any JSON-LD document a page can embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    Organization(JsonLd<Organization>),
    Product(JsonLd<ProductNode>),
    CollectionPage(JsonLd<CollectionPage>),
    BreadcrumbList(JsonLd<BreadcrumbList>),
}

impl StructuredData {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Site-wide Organization node (home page).
pub fn organization(base: &BaseUrl) -> StructuredData {
    StructuredData::Organization(JsonLd::new(Organization {
        kind: "Organization",
        name: SITE_NAME.to_string(),
        url: base.join("/"),
        logo: base.join(LOGO_PATH),
        description: SITE_DESCRIPTION.to_string(),
        same_as: Vec::new(),
    }))
}

/// Product node for a detail page.
pub fn product(base: &BaseUrl, product: &Product) -> StructuredData {
    let url = base.join(&product.path());

    StructuredData::Product(JsonLd::new(ProductNode {
        kind: "Product",
        name: product.name.clone(),
        description: product.description.clone(),
        category: product.category_label(),
        url: url.clone(),
        image: base.join(&product.image),
        brand: Brand {
            kind: "Brand",
            name: product.brand.clone(),
        },
        sku: product.sku.clone(),
        offers: Offer {
            kind: "Offer",
            price: product.price.to_string(),
            price_currency: product.currency.clone(),
            availability: product.availability.schema_url(),
            url,
        },
        aggregate_rating: product.rating.map(|r| AggregateRatingNode {
            kind: "AggregateRating",
            rating_value: r.value,
            review_count: r.review_count,
        }),
    }))
}

/// CollectionPage node for the catalog listing.
pub fn collection_page<C>(base: &BaseUrl, catalog: &C) -> StructuredData
where
    C: ProductCatalog + ?Sized,
{
    let items: Vec<ListItem<ProductStub>> = catalog
        .list_all()
        .iter()
        .zip(1u32..)
        .map(|(p, position)| ListItem {
            kind: "ListItem",
            position,
            item: ProductStub {
                kind: "Product",
                id: base.join(&p.path()),
                name: p.name.clone(),
                description: p.description.clone(),
            },
        })
        .collect();

    StructuredData::CollectionPage(JsonLd::new(CollectionPage {
        kind: "CollectionPage",
        name: "Products".to_string(),
        description: "Browse every product in the demo storefront.".to_string(),
        url: base.join(LISTING_PATH),
        main_entity: ItemList {
            kind: "ItemList",
            number_of_items: items.len(),
            item_list_element: items,
        },
    }))
}

/// Home > Products > <product> trail for a detail page.
pub fn breadcrumbs(base: &BaseUrl, product: &Product) -> StructuredData {
    let trail = [
        ("Home".to_string(), base.join("/")),
        ("Products".to_string(), base.join(LISTING_PATH)),
        (product.name.clone(), base.join(&product.path())),
    ];

    StructuredData::BreadcrumbList(JsonLd::new(BreadcrumbList {
        kind: "BreadcrumbList",
        item_list_element: trail
            .into_iter()
            .zip(1u32..)
            .map(|((name, item), position)| Crumb {
                kind: "ListItem",
                position,
                name,
                item,
            })
            .collect(),
    }))
}
