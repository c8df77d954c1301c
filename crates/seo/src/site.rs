//! Site-wide constants shared by the metadata and structured-data builders.

pub const SITE_NAME: &str = "Shopfront SEO Demo";

pub const SITE_DESCRIPTION: &str = "A demonstration storefront showing SEO best practices: \
metadata, structured data, Open Graph tags, canonical URLs and sitemaps.";

pub const LOCALE: &str = "en_US";

/// Logo and default share image, relative to the base URL.
pub const LOGO_PATH: &str = "/logo.svg";

pub const LISTING_PATH: &str = "/products";

pub const LISTING_IMAGE_PATH: &str = "/products.jpg";

pub const FAVICON_PATH: &str = "/favicon.ico";

pub const TWITTER_HANDLE: &str = "@shopfront";

/// Recommended Open Graph image size.
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
