// src/extract/page.rs
// =============================================================================
// This module turns raw HTML into a Page record: title, readable content,
// and the same-origin links the page points at.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Extraction is best-effort by design: missing elements degrade to
// placeholder strings, they never abort the crawl.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

use super::links::normalize;

/// Placeholder used when a page has no <title> element
pub const NO_TITLE: &str = "No title found";

/// Placeholder used when a page has no content container at all
pub const NO_CONTENT: &str = "No content found";

// One successfully crawled page
//
// This is the record the JSON sidecar serializes, so every field the viewer
// needs (url, title, raw content, links) lives here
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Absolute URL the page was fetched from
    pub url: String,
    /// Text of the first <title> element, or a placeholder
    pub title: String,
    /// Plain extracted text, one block per line
    pub content: String,
    /// Same-origin outgoing links, absolute, in document order
    pub links: Vec<String>,
}

// Extracts a Page record from fetched HTML
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   source_url: the URL the HTML was fetched from (already parsed)
//
// Returns: a Page. This never fails - html5ever accepts any input and
// missing pieces fall back to placeholders.
pub fn extract(html: &str, source_url: &Url) -> Page {
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selectors are constants and known
    // to be valid.
    let title_selector = Selector::parse("title").unwrap();
    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NO_TITLE.to_string());

    // Pick the main content container, most specific first:
    // <main>, then <article>, then <div class="content">, then <body>
    let content = content_candidate(&document)
        .map(|el| visible_text(el))
        .unwrap_or_else(|| NO_CONTENT.to_string());

    // Every <a href="..."> goes through the normalizer; cross-origin links
    // come back as None and are silently skipped
    let link_selector = Selector::parse("a[href]").unwrap();
    let links = document
        .select(&link_selector)
        .filter_map(|el| el.value().attr("href"))
        .filter_map(|href| normalize(href, source_url))
        .collect();

    Page {
        url: source_url.to_string(),
        title,
        content,
        links,
    }
}

// Finds the first element matching the content-container priority list
fn content_candidate(document: &Html) -> Option<ElementRef<'_>> {
    for css in ["main", "article", "div.content", "body"] {
        let selector = Selector::parse(css).unwrap();
        if let Some(el) = document.select(&selector).next() {
            return Some(el);
        }
    }
    None
}

// Collects all visible text inside an element, one trimmed text node per
// line, skipping whitespace-only nodes
fn visible_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
