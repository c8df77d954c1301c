//! Sitemap entries and their sitemaps.org XML form.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use shopfront_core::BaseUrl;
use shopfront_products::ProductCatalog;

use crate::site::LISTING_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_frequency: Option<ChangeFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

impl SitemapEntry {
    pub fn new(url: impl Into<String>, last_modified: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            last_modified,
            change_frequency: None,
            priority: None,
        }
    }

    pub fn change_frequency(mut self, freq: ChangeFrequency) -> Self {
        self.change_frequency = Some(freq);
        self
    }

    /// Clamped to `0.0..=1.0`.
    pub fn priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority.clamp(0.0, 1.0));
        self
    }
}

const HOME_PRIORITY: f32 = 1.0;
const LISTING_PRIORITY: f32 = 0.8;
const PRODUCT_PRIORITY: f32 = 0.7;

/// Home, listing, then one entry per product in catalog order, all stamped
/// with `generated_at`.
pub fn generate<C>(base: &BaseUrl, catalog: &C, generated_at: DateTime<Utc>) -> Vec<SitemapEntry>
where
    C: ProductCatalog + ?Sized,
{
    let products = catalog.list_all();
    let mut entries = Vec::with_capacity(2 + products.len());

    entries.push(
        SitemapEntry::new(base.join("/"), generated_at)
            .change_frequency(ChangeFrequency::Weekly)
            .priority(HOME_PRIORITY),
    );
    entries.push(
        SitemapEntry::new(base.join(LISTING_PATH), generated_at)
            .change_frequency(ChangeFrequency::Weekly)
            .priority(LISTING_PRIORITY),
    );
    entries.extend(products.iter().map(|p| {
        SitemapEntry::new(base.join(&p.path()), generated_at)
            .change_frequency(ChangeFrequency::Weekly)
            .priority(PRODUCT_PRIORITY)
    }));

    tracing::debug!(entries = entries.len(), "sitemap generated");
    entries
}

/// Render entries as a sitemaps.org `<urlset>` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            html_escape::encode_text(&entry.url)
        ));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        if let Some(freq) = entry.change_frequency {
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", freq.as_str()));
        }
        if let Some(priority) = entry.priority {
            xml.push_str(&format!("    <priority>{priority:.1}</priority>\n"));
        }
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}
