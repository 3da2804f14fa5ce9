// src/extract/links.rs
// =============================================================================
// This module resolves hrefs found on a page into absolute same-origin URLs.
//
// Two jobs:
// 1. Resolve relative links against the page URL (like a browser does)
// 2. Drop anything that points off-site (different host)
//
// We use the `url` crate which implements the standard URL resolution
// rules, so "../other", "/docs" and "https://example.com/x" all behave
// exactly like they would in a browser address bar.
// =============================================================================

use url::Url;

// Resolves an href against the page it was found on, keeping it only if it
// stays on the same host
//
// Parameters:
//   href: the raw href attribute value (might be relative, might be absolute)
//   base: the URL of the page the href was found on
//
// Returns: Some(absolute_url) if the link is same-origin, None otherwise
//
// Examples (base = "https://example.com/page"):
//   "/docs" -> Some("https://example.com/docs")
//   "https://example.com/about" -> Some("https://example.com/about")
//   "https://other.com/x" -> None (different host)
//   "mailto:hi@example.com" -> None (no host at all)
//
// Note: fragments are NOT stripped, so /docs and /docs#intro count as two
// distinct URLs. The crawler will visit both. Known limitation.
pub fn normalize(href: &str, base: &Url) -> Option<String> {
    // join() handles both cases: an absolute href replaces base entirely,
    // a relative href is resolved against it
    let resolved = base.join(href).ok()?;

    // Same-origin check: the resolved host must match the page's host.
    // Relative links inherit the host from base, so they always pass.
    // Schemes like mailto: and javascript: have no host and always fail.
    if resolved.host_str() == base.host_str() {
        Some(resolved.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_relative_link_resolves_against_page() {
        let result = normalize("/relative/y", &base("https://site.example/page"));
        assert_eq!(result, Some("https://site.example/relative/y".to_string()));
    }

    #[test]
    fn test_dotdot_relative_link() {
        let result = normalize("../other", &base("https://example.com/a/b/page"));
        assert_eq!(result, Some("https://example.com/a/other".to_string()));
    }

    #[test]
    fn test_absolute_same_host_accepted() {
        let result = normalize("https://site.example/about", &base("https://site.example/"));
        assert_eq!(result, Some("https://site.example/about".to_string()));
    }

    #[test]
    fn test_cross_origin_rejected() {
        let result = normalize("https://other.example/x", &base("https://site.example/"));
        assert_eq!(result, None);
    }

    #[test]
    fn test_mailto_rejected() {
        let result = normalize("mailto:test@example.com", &base("https://example.com/"));
        assert_eq!(result, None);
    }

    #[test]
    fn test_fragment_is_kept() {
        let result = normalize("/docs#intro", &base("https://example.com/"));
        assert_eq!(result, Some("https://example.com/docs#intro".to_string()));
    }

    #[test]
    fn test_bare_fragment_resolves_to_page_plus_fragment() {
        // "#top" resolves to the page URL itself plus the fragment
        let result = normalize("#top", &base("https://example.com/page"));
        assert_eq!(result, Some("https://example.com/page#top".to_string()));
    }
}
