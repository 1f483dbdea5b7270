// src/page_source/snapshot.rs
use scraper::{Html, Selector};
use url::Url;

use crate::engine::PageSignal;

/// UI regions where profile pages keep their curated outbound links. These
/// are collected separately from generic anchors so the harvester can rank
/// them as higher-confidence candidates.
const PLATFORM_CONTAINER_SELECTORS: &[&str] = &[
    "#links-section a[href]",
    ".channel-links a[href]",
    "[class*='link-list'] a[href]",
    "[class*='social'] a[href]",
];

/// Distills fetched HTML into the snapshot the discovery engine consumes.
pub fn snapshot_from_html(html: &str, base_url: &str) -> PageSignal {
    let document = Html::parse_document(html);

    PageSignal {
        text: extract_clean_text(&document),
        anchor_links: extract_anchor_links(&document, base_url),
        platform_links: extract_platform_links(&document, base_url),
        structured_blocks: extract_structured_blocks(&document),
        captions: extract_captions(&document),
    }
}

fn extract_clean_text(document: &Html) -> String {
    let body_selector = Selector::parse("body").unwrap();

    document
        .select(&body_selector)
        .next()
        .map(|body| {
            body.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

fn extract_anchor_links(document: &Html, base_url: &str) -> Vec<String> {
    let link_selector = Selector::parse("a[href]").unwrap();

    document
        .select(&link_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| resolve_url(href, base_url))
        .collect()
}

fn extract_platform_links(document: &Html, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    for selector_str in PLATFORM_CONTAINER_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                if let Some(href) = element.value().attr("href") {
                    links.push(resolve_url(href, base_url));
                }
            }
        }
    }

    links
}

fn extract_structured_blocks(document: &Html) -> Vec<String> {
    let block_selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();

    // Raw block text only; the engine owns the defensive per-block parse.
    document
        .select(&block_selector)
        .map(|script| script.text().collect::<String>())
        .collect()
}

fn extract_captions(document: &Html) -> Vec<String> {
    let caption_selector = Selector::parse("button, a[href]").unwrap();

    document
        .select(&caption_selector)
        .map(|element| {
            element
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string()
        })
        .filter(|caption| !caption.is_empty())
        .collect()
}

/// Absolute hrefs pass through unchanged; relative ones are joined against
/// the page URL. Anything unresolvable is kept raw so the classifier can
/// route it with the other unparseable links.
fn resolve_url(href: &str, base_url: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }

    if let Ok(base) = Url::parse(base_url) {
        if let Ok(joined) = base.join(href) {
            return joined.to_string();
        }
    }

    href.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_HTML: &str = r##"
        <html>
        <head>
            <script type="application/ld+json">
                {"@type": "Person", "sameAs": ["https://twitter.com/z"]}
            </script>
        </head>
        <body>
            <h1>Maker Channel</h1>
            <p>For business inquiries: hello@maker.tv</p>
            <div id="links-section">
                <a href="https://instagram.com/maker">IG</a>
            </div>
            <a href="/about">About</a>
            <a href="https://example.com">My shop</a>
            <button>View Business Email</button>
        </body>
        </html>
    "##;

    #[test]
    fn snapshot_collects_all_signal_sources() {
        let page = snapshot_from_html(PROFILE_HTML, "https://www.youtube.com/@maker");

        assert!(page.text.contains("hello@maker.tv"));
        assert_eq!(
            page.anchor_links,
            vec![
                "https://instagram.com/maker",
                "https://www.youtube.com/about",
                "https://example.com",
            ]
        );
        assert_eq!(page.platform_links, vec!["https://instagram.com/maker"]);
        assert_eq!(page.structured_blocks.len(), 1);
        assert!(page.structured_blocks[0].contains("sameAs"));
        assert!(page
            .captions
            .iter()
            .any(|caption| caption == "View Business Email"));
    }

    #[test]
    fn href_is_kept_raw_when_base_is_unusable() {
        let html = r#"<body><a href="/about">x</a></body>"#;
        let page = snapshot_from_html(html, "not a base url");

        // Neither parseable nor joinable, so the raw href survives for the
        // classifier to route.
        assert_eq!(page.anchor_links, vec!["/about"]);
    }

    #[test]
    fn empty_document_yields_empty_snapshot() {
        let page = snapshot_from_html("", "https://host.example");

        assert!(page.anchor_links.is_empty());
        assert!(page.platform_links.is_empty());
        assert!(page.structured_blocks.is_empty());
    }
}
