//! Filename extraction from URL path.

/// Trailing path segment some mirrors append after the real filename.
const DOWNLOAD_SUFFIX: &str = "/download";

/// Extracts the last path segment from a URL for use as a filename hint,
/// ignoring one trailing `/download` segment.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let path = parsed.path();
    let path = path.strip_suffix(DOWNLOAD_SUFFIX).unwrap_or(path);
    let segment = path.split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
