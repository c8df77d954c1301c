//! Per-route page metadata.
//!
//! Each route builds a [`Metadata`] record. The web layer merges it over the
//! site-wide [`SiteLayout`] with [`Metadata::resolve`] and renders the result
//! as `<head>` tags.

use shopfront_core::BaseUrl;
use shopfront_products::{Product, ProductCatalog, product_path};

use crate::site::{
    FAVICON_PATH, LISTING_IMAGE_PATH, LISTING_PATH, LOCALE, LOGO_PATH, OG_IMAGE_HEIGHT,
    OG_IMAGE_WIDTH, SITE_DESCRIPTION, SITE_NAME, TWITTER_HANDLE,
};

/// `og:type` values used by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgType {
    Website,
    Product,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Product => "product",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: Option<String>,
}

impl OgImage {
    /// Share image at the recommended 1200x630 size.
    fn sized(url: String, alt: impl Into<String>) -> Self {
        Self {
            url,
            width: Some(OG_IMAGE_WIDTH),
            height: Some(OG_IMAGE_HEIGHT),
            alt: Some(alt.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    pub og_type: OgType,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwitterCardKind {
    SummaryLargeImage,
}

impl TwitterCardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCardKind::SummaryLargeImage => "summary_large_image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: TwitterCardKind,
    pub title: String,
    pub description: String,
    pub creator: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePreview {
    Large,
}

impl ImagePreview {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePreview::Large => "large",
        }
    }
}

/// Googlebot-specific directives. `-1` means "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    pub max_snippet: i32,
    pub max_image_preview: ImagePreview,
    pub max_video_preview: i32,
}

impl GoogleBot {
    pub fn content(&self) -> String {
        let mut parts = index_follow(self.index, self.follow);
        parts.push(format!("max-video-preview:{}", self.max_video_preview));
        parts.push(format!("max-image-preview:{}", self.max_image_preview.as_str()));
        parts.push(format!("max-snippet:{}", self.max_snippet));
        parts.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub nocache: bool,
    pub google_bot: Option<GoogleBot>,
}

impl Robots {
    /// Fully indexable, no snippet/preview limits.
    pub fn index_all() -> Self {
        Self {
            index: true,
            follow: true,
            nocache: false,
            google_bot: Some(GoogleBot {
                index: true,
                follow: true,
                max_snippet: -1,
                max_image_preview: ImagePreview::Large,
                max_video_preview: -1,
            }),
        }
    }

    pub fn noindex() -> Self {
        Self {
            index: false,
            follow: false,
            nocache: false,
            google_bot: None,
        }
    }

    /// Value of `<meta name="robots">`.
    pub fn content(&self) -> String {
        let mut parts = index_follow(self.index, self.follow);
        if self.nocache {
            parts.push("nocache".to_string());
        }
        parts.join(", ")
    }
}

fn index_follow(index: bool, follow: bool) -> Vec<String> {
    vec![
        if index { "index" } else { "noindex" }.to_string(),
        if follow { "follow" } else { "nofollow" }.to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternates {
    pub canonical: String,
}

/// Page-level metadata for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
    pub robots: Option<Robots>,
    pub alternates: Option<Alternates>,
}

impl Metadata {
    pub fn canonical(&self) -> Option<&str> {
        self.alternates.as_ref().map(|a| a.canonical.as_str())
    }

    /// Merge this page's metadata over the layout defaults.
    ///
    /// Shallow: a block set on the page replaces the layout's block wholesale.
    pub fn resolve(&self, layout: &SiteLayout) -> ResolvedMetadata {
        ResolvedMetadata {
            title: layout.apply_title_template(&self.title),
            description: self.description.clone(),
            keywords: if self.keywords.is_empty() {
                layout.keywords.clone()
            } else {
                self.keywords.clone()
            },
            authors: layout.authors.clone(),
            creator: layout.creator.clone(),
            open_graph: self.open_graph.clone().or_else(|| layout.open_graph.clone()),
            twitter: self.twitter.clone().or_else(|| layout.twitter.clone()),
            robots: self.robots.or(layout.robots),
            canonical: self.canonical().map(str::to_string),
            icon: layout.icon.clone(),
            viewport: layout.viewport,
            theme_colors: layout.theme_colors.clone(),
            color_scheme: layout.color_scheme,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: &'static str,
    pub initial_scale: f32,
    pub maximum_scale: f32,
}

impl Viewport {
    pub fn content(&self) -> String {
        format!(
            "width={}, initial-scale={}, maximum-scale={}",
            self.width, self.initial_scale, self.maximum_scale
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColor {
    pub media: &'static str,
    pub color: &'static str,
}

/// Site-wide metadata defaults every page is merged over.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLayout {
    pub default_title: String,
    /// `%s` is replaced by the page title.
    pub title_template: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub creator: String,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
    pub robots: Option<Robots>,
    pub icon: String,
    pub viewport: Viewport,
    pub theme_colors: Vec<ThemeColor>,
    pub color_scheme: &'static str,
}

impl SiteLayout {
    pub fn apply_title_template(&self, title: &str) -> String {
        if title.trim().is_empty() {
            self.default_title.clone()
        } else {
            self.title_template.replace("%s", title)
        }
    }
}

/// Page metadata after merging with the layout; what ends up in `<head>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub creator: String,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
    pub robots: Option<Robots>,
    pub canonical: Option<String>,
    pub icon: String,
    pub viewport: Viewport,
    pub theme_colors: Vec<ThemeColor>,
    pub color_scheme: &'static str,
}

fn keywords<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.into();
        if !out.iter().any(|k| k.eq_ignore_ascii_case(&item)) {
            out.push(item);
        }
    }
    out
}

/// Site-wide defaults.
pub fn layout(base: &BaseUrl) -> SiteLayout {
    SiteLayout {
        default_title: SITE_NAME.to_string(),
        title_template: format!("%s | {SITE_NAME}"),
        description: SITE_DESCRIPTION.to_string(),
        keywords: keywords([
            "SEO",
            "Search Engine Optimization",
            "Rust",
            "Web Development",
            "Metadata",
            "Open Graph",
            "Structured Data",
        ]),
        authors: vec![SITE_NAME.to_string()],
        creator: SITE_NAME.to_string(),
        open_graph: Some(OpenGraph {
            title: SITE_NAME.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            url: base.join("/"),
            site_name: SITE_NAME.to_string(),
            locale: LOCALE.to_string(),
            og_type: OgType::Website,
            images: Vec::new(),
        }),
        twitter: Some(TwitterCard {
            card: TwitterCardKind::SummaryLargeImage,
            title: SITE_NAME.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            creator: None,
            images: Vec::new(),
        }),
        robots: Some(Robots::index_all()),
        icon: FAVICON_PATH.to_string(),
        viewport: Viewport {
            width: "device-width",
            initial_scale: 1.0,
            maximum_scale: 5.0,
        },
        theme_colors: vec![
            ThemeColor {
                media: "(prefers-color-scheme: light)",
                color: "#ffffff",
            },
            ThemeColor {
                media: "(prefers-color-scheme: dark)",
                color: "#000000",
            },
        ],
        color_scheme: "dark light",
    }
}

/// Home page (`/`).
pub fn home(base: &BaseUrl) -> Metadata {
    let title = "Home - SEO best practices".to_string();
    let description = "Home page of a storefront demonstrating SEO best practices.".to_string();
    let url = base.join("/");
    let image = base.join(LOGO_PATH);

    Metadata {
        keywords: keywords(["home", "SEO best practices", "storefront"]),
        open_graph: Some(OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: url.clone(),
            site_name: SITE_NAME.to_string(),
            locale: LOCALE.to_string(),
            og_type: OgType::Website,
            images: vec![OgImage::sized(image.clone(), SITE_NAME)],
        }),
        twitter: Some(TwitterCard {
            card: TwitterCardKind::SummaryLargeImage,
            title: title.clone(),
            description: description.clone(),
            creator: None,
            images: vec![image],
        }),
        robots: None,
        alternates: Some(Alternates { canonical: url }),
        title,
        description,
    }
}

/// Catalog root (`/products`).
pub fn listing(base: &BaseUrl) -> Metadata {
    let title = "Products - SEO best practices".to_string();
    let description = "Browse every product in the demo storefront.".to_string();
    let url = base.join(LISTING_PATH);
    let image = base.join(LISTING_IMAGE_PATH);

    Metadata {
        keywords: keywords(["products", "SEO best practices", "storefront"]),
        open_graph: Some(OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: url.clone(),
            site_name: SITE_NAME.to_string(),
            locale: LOCALE.to_string(),
            og_type: OgType::Website,
            images: vec![OgImage::sized(image.clone(), "Product catalog")],
        }),
        twitter: Some(TwitterCard {
            card: TwitterCardKind::SummaryLargeImage,
            title: title.clone(),
            description: description.clone(),
            creator: Some(TWITTER_HANDLE.to_string()),
            images: vec![image],
        }),
        robots: Some(Robots::index_all()),
        alternates: Some(Alternates { canonical: url }),
        title,
        description,
    }
}

/// Product detail page (`/products/<id>`).
///
/// An unknown id yields the reduced variant: no Open Graph or Twitter block,
/// canonical still pointing at the requested id.
pub fn product_detail<C>(base: &BaseUrl, catalog: &C, id: &str) -> Metadata
where
    C: ProductCatalog + ?Sized,
{
    match catalog.find_by_id(id) {
        Some(product) => found_product(base, product),
        None => missing_product(base, id),
    }
}

/// Detail metadata for a product that has already been looked up.
pub fn found_product(base: &BaseUrl, product: &Product) -> Metadata {
    let title = format!("{} - Product", product.name);
    let url = base.join(&product.path());
    let image = base.join(&product.image);

    Metadata {
        keywords: keywords(
            ["product", "SEO best practices", product.brand.as_str()]
                .into_iter()
                .map(str::to_string)
                .chain(product.category.iter().cloned()),
        ),
        open_graph: Some(OpenGraph {
            title: title.clone(),
            description: product.description.clone(),
            url: url.clone(),
            site_name: SITE_NAME.to_string(),
            locale: LOCALE.to_string(),
            og_type: OgType::Product,
            images: vec![OgImage::sized(image.clone(), product.name.clone())],
        }),
        twitter: Some(TwitterCard {
            card: TwitterCardKind::SummaryLargeImage,
            title: title.clone(),
            description: product.description.clone(),
            creator: None,
            images: vec![image],
        }),
        robots: None,
        alternates: Some(Alternates { canonical: url }),
        title,
        description: product.description.clone(),
    }
}

/// Reduced detail metadata for an id the catalog does not know. Not indexed.
pub fn missing_product(base: &BaseUrl, id: &str) -> Metadata {
    Metadata {
        title: "Product Not Found".to_string(),
        description: "The requested product could not be found.".to_string(),
        keywords: keywords(["product", "SEO best practices", "storefront"]),
        open_graph: None,
        twitter: None,
        robots: Some(Robots::noindex()),
        alternates: Some(Alternates {
            canonical: base.join(&product_path(id)),
        }),
    }
}

/// Any route that does not exist.
pub fn not_found() -> Metadata {
    Metadata {
        title: "Page Not Found".to_string(),
        description: "The page you are looking for does not exist.".to_string(),
        keywords: Vec::new(),
        open_graph: None,
        twitter: None,
        robots: Some(Robots::noindex()),
        alternates: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_products::InMemoryCatalog;

    fn base() -> BaseUrl {
        BaseUrl::normalize(Some("https://shop.example.com"))
    }

    #[test]
    fn detail_for_known_product_uses_product_fields() {
        let catalog = InMemoryCatalog::reference().unwrap();
        let md = product_detail(&base(), &catalog, "1");

        assert!(md.title.contains("Wireless Bluetooth Headphones Pro"));
        assert_eq!(md.canonical(), Some("https://shop.example.com/products/1"));
        assert!(md.description.starts_with("Premium wireless headphones"));

        let og = md.open_graph.as_ref().unwrap();
        assert_eq!(og.url, "https://shop.example.com/products/1");
        assert_eq!(og.og_type, OgType::Product);
        assert_eq!(
            og.images[0].url,
            "https://shop.example.com/images/wireless-headphones-pro.jpg"
        );
        assert_eq!(og.images[0].width, Some(1200));
        assert_eq!(og.images[0].height, Some(630));
        assert_eq!(og.images[0].alt.as_deref(), Some("Wireless Bluetooth Headphones Pro"));

        let tw = md.twitter.as_ref().unwrap();
        assert_eq!(tw.card, TwitterCardKind::SummaryLargeImage);
        assert_eq!(tw.images, vec![og.images[0].url.clone()]);
    }

    #[test]
    fn detail_keywords_append_categories() {
        let catalog = InMemoryCatalog::reference().unwrap();
        let md = product_detail(&base(), &catalog, "1");
        assert_eq!(md.keywords[0], "product");
        assert!(md.keywords.ends_with(&[
            "Electronics".to_string(),
            "Audio".to_string(),
            "Headphones".to_string(),
        ]));
    }

    #[test]
    fn detail_for_unknown_product_is_reduced() {
        let catalog = InMemoryCatalog::reference().unwrap();
        let md = product_detail(&base(), &catalog, "999");

        assert!(md.open_graph.is_none());
        assert!(md.twitter.is_none());
        assert_eq!(md.canonical(), Some("https://shop.example.com/products/999"));
        assert_eq!(md.title, "Product Not Found");
    }

    #[test]
    fn unknown_product_is_noindex_like_unknown_routes() {
        let catalog = InMemoryCatalog::reference().unwrap();
        let layout = layout(&base());
        let missing = product_detail(&base(), &catalog, "999").resolve(&layout);
        let generic = not_found().resolve(&layout);

        assert_eq!(missing.robots, Some(Robots::noindex()));
        assert_eq!(missing.robots, generic.robots);
        assert!(missing.robots.unwrap().google_bot.is_none());
    }

    #[test]
    fn product_detail_matches_direct_builders() {
        let catalog = InMemoryCatalog::reference().unwrap();
        let product = catalog.find_by_id("2").unwrap();
        assert_eq!(product_detail(&base(), &catalog, "2"), found_product(&base(), product));
        assert_eq!(product_detail(&base(), &catalog, "x"), missing_product(&base(), "x"));
    }

    #[test]
    fn unknown_id_is_percent_encoded_in_canonical() {
        let catalog = InMemoryCatalog::reference().unwrap();
        let md = product_detail(&base(), &catalog, "a b");
        assert_eq!(md.canonical(), Some("https://shop.example.com/products/a%20b"));
    }

    #[test]
    fn listing_carries_robots_directives() {
        let md = listing(&base());
        let robots = md.robots.unwrap();
        assert!(robots.index && robots.follow && !robots.nocache);
        assert_eq!(robots.content(), "index, follow");

        let gb = robots.google_bot.unwrap();
        assert_eq!(
            gb.content(),
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        );
        assert_eq!(md.canonical(), Some("https://shop.example.com/products"));
    }

    #[test]
    fn home_canonical_has_no_trailing_slash() {
        let md = home(&BaseUrl::normalize(Some("https://shop.example.com/")));
        assert_eq!(md.canonical(), Some("https://shop.example.com"));
        assert_eq!(md.open_graph.unwrap().url, "https://shop.example.com");
    }

    #[test]
    fn not_found_route_is_noindex() {
        let md = not_found();
        assert_eq!(md.robots.unwrap().content(), "noindex, nofollow");
        assert!(md.alternates.is_none());
    }

    #[test]
    fn builders_are_deterministic() {
        let catalog = InMemoryCatalog::reference().unwrap();
        assert_eq!(home(&base()), home(&base()));
        assert_eq!(listing(&base()), listing(&base()));
        assert_eq!(
            product_detail(&base(), &catalog, "2"),
            product_detail(&base(), &catalog, "2")
        );
    }

    #[test]
    fn resolve_applies_title_template_and_page_overrides() {
        let layout = layout(&base());
        let resolved = home(&base()).resolve(&layout);

        assert_eq!(resolved.title, "Home - SEO best practices | Shopfront SEO Demo");
        assert_eq!(resolved.canonical.as_deref(), Some("https://shop.example.com"));
        // Page block wins over the layout block.
        assert_eq!(resolved.open_graph.unwrap().images.len(), 1);
        // Home sets no robots, so the layout's apply.
        assert_eq!(resolved.robots, Some(Robots::index_all()));
        assert_eq!(resolved.icon, "/favicon.ico");
    }

    #[test]
    fn resolve_inherits_layout_blocks_the_page_leaves_unset() {
        let catalog = InMemoryCatalog::reference().unwrap();
        let layout = layout(&base());
        let resolved = product_detail(&base(), &catalog, "999").resolve(&layout);

        assert_eq!(resolved.title, "Product Not Found | Shopfront SEO Demo");
        assert_eq!(resolved.open_graph, layout.open_graph);
        assert_eq!(resolved.twitter, layout.twitter);
    }

    #[test]
    fn empty_page_title_falls_back_to_default() {
        let layout = layout(&base());
        assert_eq!(layout.apply_title_template("  "), "Shopfront SEO Demo");
    }

    #[test]
    fn keywords_are_deduplicated_in_order() {
        assert_eq!(keywords(["a", "B", "b", "c", "A"]), vec!["a", "B", "c"]);
    }

    #[test]
    fn viewport_content() {
        assert_eq!(
            layout(&base()).viewport.content(),
            "width=device-width, initial-scale=1, maximum-scale=5"
        );
    }
}
