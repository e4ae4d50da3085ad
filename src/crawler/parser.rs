//! HTML parser for extracting anchor hrefs
//!
//! This module turns one page body into the ordered list of raw `href`
//! attribute values of its anchor elements. No filtering, trimming, or
//! deduplication happens here; classification owns all of that.

use scraper::{Html, Selector};

/// Extracts every anchor href from an HTML document, in document order
///
/// # Extraction Rules
///
/// - Every `<a>` element is visited depth-first in document order.
/// - The value of its `href` attribute is collected as-is; when the markup
///   repeats the attribute, the parser keeps the first occurrence.
/// - Anchors without an `href` attribute are skipped.
/// - Values are NOT deduplicated, resolved, or validated at this stage.
///
/// The html5ever parser underneath is lenient and never fails on malformed
/// markup, so this function is total: broken HTML yields whatever anchors
/// survive tree construction.
///
/// # Arguments
///
/// * `html` - The page body to parse
///
/// # Returns
///
/// The href values in document order (possibly empty)
///
/// # Example
///
/// ```
/// use deadscan::crawler::extract_hrefs;
///
/// let html = r#"<html><body><a href="/a">A</a><a href="/b">B</a></body></html>"#;
/// assert_eq!(extract_hrefs(html), vec!["/a", "/b"]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse("a") only fails on an invalid selector string, which
    // a literal tag name cannot be.
    let anchor_selector = Selector::parse("a").unwrap();

    document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
