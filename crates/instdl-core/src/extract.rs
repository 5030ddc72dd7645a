//! Link and pattern extraction from fetched vendor pages.
//!
//! Raw-text regex matching is the primary path; the parsed anchor list is
//! the fallback for when quoting or attribute layout changes break the raw
//! pattern.

use regex::{Captures, Regex};
use scraper::{Html, Selector};

use crate::error::InstdlError;

/// Installer link and raw version captured from a vendor page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Capture group 1.
    pub link: String,
    /// Capture group 2; empty when the pattern has none or it did not participate.
    pub version: String,
}

impl LinkMatch {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let group = |i| {
            caps.get(i)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        };
        LinkMatch {
            link: group(1),
            version: group(2),
        }
    }
}

/// First occurrence of `re` in the raw `text`. No ranking of later
/// candidates; a match with an empty link group counts as no match.
pub fn first_capture(text: &str, re: &Regex) -> Option<LinkMatch> {
    re.captures(text)
        .map(|caps| LinkMatch::from_captures(&caps))
        .filter(|m| !m.link.is_empty())
}

/// Every `<a href>` value in document order.
pub fn anchor_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let sel = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    document
        .select(&sel)
        .filter_map(|a| a.value().attr("href"))
        .map(|h| h.trim().to_string())
        .collect()
}

/// First anchor href matched by `href_re` (anchor the pattern to require a
/// full-href match), with the same group layout as `first_capture`.
pub fn first_matching_href(html: &str, href_re: &Regex) -> Option<LinkMatch> {
    anchor_hrefs(html)
        .into_iter()
        .find_map(|href| first_capture(&href, href_re))
}

/// Resolve `relative` against `base` (RFC 3986 join).
pub fn resolve_url(base: &str, relative: &str) -> Result<String, InstdlError> {
    let base_url =
        url::Url::parse(base).map_err(|e| InstdlError::parse(base, format!("valid base URL ({})", e)))?;
    let joined = base_url
        .join(relative)
        .map_err(|e| InstdlError::parse(base, format!("joinable link {:?} ({})", relative, e)))?;
    Ok(joined.to_string())
}
