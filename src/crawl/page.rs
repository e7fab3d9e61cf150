// src/crawl/page.rs
// =============================================================================
// This module turns a fetched HTML page into the list of URLs it links to.
//
// How it works:
// 1. Parse the HTML into a DOM with the `scraper` crate
// 2. Select every <a> element that has an href attribute, in document order
// 3. Resolve each href against the page's own URL (so "/docs" and "../x"
//    become absolute), dropping the fragment
//
// Deciding which of those URLs matter (valid? same domain? file or page?)
// is the classifier's job, not this module's. Extraction stays dumb on
// purpose: it reports what the page says, nothing more.
//
// Rust concepts:
// - scraper: CSS-selector queries over parsed HTML
// - Url::join: The same relative-URL resolution a browser does
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts every linked URL from an HTML page, resolved to absolute form.
//
// Parameters:
//   html: the page body
//   page_url: the URL the body was fetched from (resolution base)
//
// Returns URLs in the order their anchors appear in the document. Hrefs
// that can't be resolved are skipped; nothing here filters by scheme or
// domain.
pub fn extract_links(html: &str, page_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    let document = Html::parse_document(html);

    // The selector is a constant and known to be valid, so unwrap is safe
    let selector = Selector::parse("a[href]").unwrap();

    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => return links,
    };

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(resolved) = resolve_href(&base, href) {
                links.push(resolved);
            }
        }
    }

    links
}

// Resolves one href against the page URL and strips the fragment.
//
// Stripping the fragment means href="#" and href="#section" both resolve
// to the page's own URL - the crawler sees one URL per document, not one
// per scroll position.
fn resolve_href(base: &Url, href: &str) -> Option<String> {
    match base.join(href) {
        Ok(mut url) => {
            url.set_fragment(None);
            Some(url.to_string())
        }
        Err(_) => None,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does Url::join do?
//    - Resolves a reference the way a browser resolves an href
//    - "https://a.com/docs/" + "guide" = "https://a.com/docs/guide"
//    - "https://a.com/docs/" + "/top" = "https://a.com/top"
//    - An absolute href replaces the base entirely
//
// 2. Why not skip mailto:/tel:/javascript: links here?
//    - join() resolves them fine ("mailto:a@b.com" is a legal URL)
//    - They have no authority, so the validity check downstream rejects
//      them anyway - one rejection path instead of two lists to maintain
//
// 3. What is a fragment and why strip it?
//    - The part after '#': it names a position WITHIN a document
//    - "page", "page#top" and "page#faq" are the same fetch
//    - Keeping fragments would make the visited set treat them as three
//      different pages and fetch the same document three times
//
// 4. Why return Vec<String> and not a set?
//    - Order matters: the crawler descends in the order anchors appear
//    - Deduplication happens in the crawler's own link set
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["https://www.rust-lang.org/"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let html = r#"<a href="/docs">Docs</a>"#;
        let links = extract_links(html, "https://example.com/page");
        assert_eq!(links, vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_fragment_resolves_to_page_itself() {
        let html = r##"<a href="#">Top</a>"##;
        let links = extract_links(html, "https://example.com/page");
        assert_eq!(links, vec!["https://example.com/page"]);
    }

    #[test]
    fn test_fragment_is_stripped() {
        let html = r##"<a href="/docs#install">Install</a>"##;
        let links = extract_links(html, "https://example.com/page");
        assert_eq!(links, vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_mailto_is_extracted_not_filtered() {
        // Extraction reports it; the validity check downstream rejects it
        let html = r#"<a href="mailto:test@example.com">Email</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["mailto:test@example.com"]);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let html = r#"
            <a href="/first">1</a>
            <p><a href="/second">2</a></p>
            <a href="/third">3</a>
        "#;
        let links = extract_links(html, "https://example.com/");
        assert_eq!(
            links,
            vec![
                "https://example.com/first",
                "https://example.com/second",
                "https://example.com/third"
            ]
        );
    }

    #[test]
    fn test_invalid_base_yields_nothing() {
        let html = r#"<a href="/docs">Docs</a>"#;
        let links = extract_links(html, "not a url");
        assert!(links.is_empty());
    }
}
