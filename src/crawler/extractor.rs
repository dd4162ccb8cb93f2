//! Content extraction
//!
//! Given raw page content and a selector rule, this module produces the
//! page title, the normalized body text of the content region, and the
//! links found inside that region. Extraction is a pure function: identical
//! input always yields identical output.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracted information from one HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Text of the `<title>` element, or empty if absent
    pub title: String,

    /// Visible text of the content region, whitespace-collapsed and trimmed
    pub body: String,

    /// Absolute URLs of anchors inside the content region, fragments
    /// stripped. Links outside the region are intentionally ignored.
    pub links: Vec<Url>,
}

/// Extracts title, body text, and links from raw HTML
///
/// # Selector Rules
///
/// `selector` is a comma-separated list of CSS selector candidates tried in
/// order; the first one with a match becomes the content region (so
/// `".docs-content, main, article"` means "the first of these that
/// exists"). When none match, the `<body>` element is used, and failing
/// that the whole document.
///
/// # Arguments
///
/// * `html` - The raw HTML content
/// * `selector` - Comma-separated selector candidates for the content region
/// * `page_url` - The page's own URL, used to resolve relative hrefs
pub fn extract(html: &str, selector: &str, page_url: &Url) -> ExtractedPage {
    let document = Html::parse_document(html);

    let title = extract_title(&document);

    let content = select_content(&document, selector)
        .unwrap_or_else(|| document.root_element());

    ExtractedPage {
        title,
        body: visible_text(content),
        links: extract_links(content, page_url),
    }
}

/// Extracts the page title, or an empty string if there is none
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Finds the content region by trying each selector candidate in order
fn select_content<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    for candidate in selector.split(',') {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }

        if let Ok(parsed) = Selector::parse(candidate) {
            if let Some(element) = document.select(&parsed).next() {
                return Some(element);
            }
        }
    }

    // No candidate matched, fall back to the document body
    let body_selector = Selector::parse("body").ok()?;
    document.select(&body_selector).next()
}

/// Collects the visible text of a subtree, collapsing whitespace runs
///
/// Text inside `<script>`, `<style>`, and `<noscript>` is not visible and
/// is skipped.
fn visible_text(element: ElementRef) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for node in element.descendants() {
        if let Some(text) = node.value().as_text() {
            let hidden = node
                .parent()
                .and_then(ElementRef::wrap)
                .map(|parent| matches!(parent.value().name(), "script" | "style" | "noscript"))
                .unwrap_or(false);

            if !hidden {
                parts.extend(text.split_whitespace());
            }
        }
    }

    parts.join(" ")
}

/// Extracts anchor links from the content region
fn extract_links(content: ElementRef, page_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in content.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(resolved) = resolve_link(href, page_url) {
                links.push(resolved);
            }
        }
    }

    links
}

/// Resolves an href to an absolute URL with the fragment stripped
///
/// Returns None for hrefs that are not crawlable pages:
/// - fragment-only links (same-page anchors)
/// - `javascript:`, `mailto:`, `tel:` schemes and data URIs
/// - unparseable hrefs and non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let mut resolved = page_url.join(href).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    resolved.set_fragment(None);
    Some(resolved)
}
