use std::sync::Arc;

use reqwest::StatusCode;

use shopfront_core::BaseUrl;
use shopfront_products::{InMemoryCatalog, ProductCatalog};

const PUBLIC_BASE: &str = "https://shop.example.com";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let catalog: Arc<dyn ProductCatalog> = Arc::new(InMemoryCatalog::reference().unwrap());
        let app = shopfront_web::app::build_app(BaseUrl::normalize(Some(PUBLIC_BASE)), catalog);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn get(&self, path: &str) -> (StatusCode, String) {
        let res = reqwest::Client::new()
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.text().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Parse every embedded JSON-LD block of a page.
fn json_ld_blocks(html: &str) -> Vec<serde_json::Value> {
    const OPEN: &str = r#"<script type="application/ld+json">"#;
    html.split(OPEN)
        .skip(1)
        .map(|rest| {
            let end = rest.find("</script>").expect("unterminated script");
            serde_json::from_str(&rest[..end]).expect("invalid JSON-LD")
        })
        .collect()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let (status, _) = srv.get("/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn home_page_has_head_tags_and_organization() {
    let srv = TestServer::spawn().await;
    let (status, html) = srv.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Home - SEO best practices | Shopfront SEO Demo</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="https://shop.example.com">"#));
    assert!(html.contains(r#"<meta property="og:image" content="https://shop.example.com/logo.svg">"#));

    let blocks = json_ld_blocks(&html);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["@type"], "Organization");
    assert_eq!(blocks[0]["url"], PUBLIC_BASE);
}

#[tokio::test]
async fn listing_page_has_robots_and_collection() {
    let srv = TestServer::spawn().await;
    let (status, html) = srv.get("/products").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<meta name="robots" content="index, follow">"#));
    assert!(html.contains(
        r#"<meta name="googlebot" content="index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1">"#
    ));
    assert!(html.contains(r#"<link rel="canonical" href="https://shop.example.com/products">"#));

    let blocks = json_ld_blocks(&html);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["@type"], "CollectionPage");
    assert_eq!(
        blocks[0]["mainEntity"]["itemListElement"].as_array().unwrap().len(),
        4
    );
}

#[tokio::test]
async fn known_product_renders_product_and_breadcrumbs() {
    let srv = TestServer::spawn().await;
    let (status, html) = srv.get("/products/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Wireless Bluetooth Headphones Pro - Product | Shopfront SEO Demo</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="https://shop.example.com/products/1">"#));
    assert!(html.contains(r#"<meta property="og:type" content="product">"#));

    let blocks = json_ld_blocks(&html);
    let types: Vec<&str> = blocks.iter().map(|b| b["@type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["Product", "BreadcrumbList"]);
    assert_eq!(blocks[0]["aggregateRating"]["reviewCount"], 324);
    assert_eq!(blocks[0]["offers"]["price"], "199.99");
    assert_eq!(blocks[1]["itemListElement"][2]["name"], "Wireless Bluetooth Headphones Pro");
}

#[tokio::test]
async fn unknown_product_is_404_with_canonical() {
    let srv = TestServer::spawn().await;
    let (status, html) = srv.get("/products/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("<title>Product Not Found | Shopfront SEO Demo</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="https://shop.example.com/products/999">"#));
    assert!(!html.contains(r#"<meta property="og:type" content="product">"#));
    assert!(html.contains(r#"<meta name="robots" content="noindex, nofollow">"#));
    assert!(!html.contains(r#"name="googlebot""#));
    assert!(json_ld_blocks(&html).is_empty());
}

#[tokio::test]
async fn sitemap_lists_fixed_urls_then_products() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/sitemap.xml", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/xml"));

    let xml = res.text().await.unwrap();
    let locs: Vec<&str> = xml
        .lines()
        .filter_map(|l| l.trim().strip_prefix("<loc>")?.strip_suffix("</loc>"))
        .collect();
    assert_eq!(
        locs,
        vec![
            "https://shop.example.com",
            "https://shop.example.com/products",
            "https://shop.example.com/products/1",
            "https://shop.example.com/products/2",
            "https://shop.example.com/products/3",
            "https://shop.example.com/products/4",
        ]
    );
}

#[tokio::test]
async fn unknown_route_is_noindex_404() {
    let srv = TestServer::spawn().await;
    let (status, html) = srv.get("/does/not/exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("<title>Page Not Found | Shopfront SEO Demo</title>"));
    assert!(html.contains(r#"<meta name="robots" content="noindex, nofollow">"#));
    assert!(!html.contains(r#"rel="canonical""#));
}
