//! HTML rendering: `<head>` tags from resolved metadata, embedded JSON-LD,
//! and the minimal page bodies.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use shopfront_products::Product;
use shopfront_seo::StructuredData;
use shopfront_seo::metadata::ResolvedMetadata;

/// Full HTML document for a page.
pub fn document(
    meta: &ResolvedMetadata,
    structured: &[StructuredData],
    body: &str,
) -> serde_json::Result<String> {
    let mut head = head_tags(meta);
    for data in structured {
        let _ = writeln!(
            head,
            r#"<script type="application/ld+json">{}</script>"#,
            script_safe_json(&data.to_json()?)
        );
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}</head>\n<body>\n{body}</body>\n</html>\n"
    ))
}

/// JSON text safe to place inside `<script>`. `</` can only occur inside JSON
/// strings, where `<\/` decodes to the same characters.
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(out, r#"<meta name="{}" content="{}">"#, attr(name), attr(content));
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta property="{}" content="{}">"#,
        attr(property),
        attr(content)
    );
}

pub fn head_tags(meta: &ResolvedMetadata) -> String {
    let mut out = String::new();
    out.push_str("<meta charset=\"utf-8\">\n");
    meta_name(&mut out, "viewport", &meta.viewport.content());
    let _ = writeln!(out, "<title>{}</title>", text(&meta.title));
    meta_name(&mut out, "description", &meta.description);
    for author in &meta.authors {
        meta_name(&mut out, "author", author);
    }
    if !meta.keywords.is_empty() {
        meta_name(&mut out, "keywords", &meta.keywords.join(","));
    }
    meta_name(&mut out, "creator", &meta.creator);

    if let Some(robots) = &meta.robots {
        meta_name(&mut out, "robots", &robots.content());
        if let Some(gb) = &robots.google_bot {
            meta_name(&mut out, "googlebot", &gb.content());
        }
    }

    if let Some(canonical) = &meta.canonical {
        let _ = writeln!(out, r#"<link rel="canonical" href="{}">"#, attr(canonical));
    }

    if let Some(og) = &meta.open_graph {
        meta_property(&mut out, "og:title", &og.title);
        meta_property(&mut out, "og:description", &og.description);
        meta_property(&mut out, "og:url", &og.url);
        meta_property(&mut out, "og:site_name", &og.site_name);
        meta_property(&mut out, "og:locale", &og.locale);
        for image in &og.images {
            meta_property(&mut out, "og:image", &image.url);
            if let Some(w) = image.width {
                meta_property(&mut out, "og:image:width", &w.to_string());
            }
            if let Some(h) = image.height {
                meta_property(&mut out, "og:image:height", &h.to_string());
            }
            if let Some(alt) = &image.alt {
                meta_property(&mut out, "og:image:alt", alt);
            }
        }
        meta_property(&mut out, "og:type", og.og_type.as_str());
    }

    if let Some(tw) = &meta.twitter {
        meta_name(&mut out, "twitter:card", tw.card.as_str());
        if let Some(creator) = &tw.creator {
            meta_name(&mut out, "twitter:creator", creator);
        }
        meta_name(&mut out, "twitter:title", &tw.title);
        meta_name(&mut out, "twitter:description", &tw.description);
        for image in &tw.images {
            meta_name(&mut out, "twitter:image", image);
        }
    }

    for theme in &meta.theme_colors {
        let _ = writeln!(
            out,
            r#"<meta name="theme-color" media="{}" content="{}">"#,
            attr(theme.media),
            attr(theme.color)
        );
    }
    meta_name(&mut out, "color-scheme", meta.color_scheme);
    let _ = writeln!(out, r#"<link rel="icon" href="{}">"#, attr(&meta.icon));
    out
}

pub fn home_body() -> String {
    "<main>\n\
     <h1>SEO best practices for a storefront.</h1>\n\
     <p>Every page here ships titles, descriptions, Open Graph and Twitter tags, \
     canonical links and JSON-LD structured data.</p>\n\
     <a href=\"/products\">Products</a>\n\
     </main>\n"
        .to_string()
}

pub fn listing_body(products: &[Product]) -> String {
    let mut out = String::from("<main>\n<h1>Products</h1>\n<ul>\n");
    for p in products {
        let _ = writeln!(
            out,
            r#"<li><a href="{}">{}</a></li>"#,
            attr(&p.path()),
            text(&p.name)
        );
    }
    out.push_str("</ul>\n</main>\n");
    out
}

pub fn product_body(p: &Product) -> String {
    let mut out = String::from("<main>\n<article>\n");
    let _ = writeln!(out, "<h1>{}</h1>", text(&p.name));
    let _ = writeln!(out, "<p>{}</p>", text(&p.description));
    let _ = writeln!(out, "<p>Price: {} {}</p>", p.price, text(&p.currency));
    let _ = writeln!(out, "<p>Category: {}</p>", text(&p.category_label()));
    let _ = writeln!(out, "<p>Brand: {}</p>", text(&p.brand));
    let _ = writeln!(out, "<p>Availability: {}</p>", p.availability);
    if let Some(rating) = &p.rating {
        let _ = writeln!(
            out,
            "<p>Rating: {} / 5 ({} reviews)</p>",
            rating.value, rating.review_count
        );
    }
    out.push_str("</article>\n<a href=\"/products\">Products</a>\n</main>\n");
    out
}

pub fn product_not_found_body(id: &str) -> String {
    format!(
        "<main>\n<h1>Product Not Found</h1>\n<p>No product with id \"{}\" exists.</p>\n\
         <a href=\"/products\">Back to products</a>\n</main>\n",
        text(id)
    )
}

pub fn not_found_body() -> String {
    "<main>\n<h1>Page Not Found</h1>\n<a href=\"/\">Home</a>\n</main>\n".to_string()
}
