//! URL modeling and filename derivation.
//!
//! Derives the local installer filename from the resolved URL path,
//! sanitized so it is safe as a single path component.

mod path;
mod sanitize;

use path::filename_from_url_path;
pub use sanitize::sanitize_filename;

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Derives a safe filename for saving an installer.
///
/// Uses the last path segment of `url` after stripping one trailing
/// `/download` segment (SourceForge-style mirror links). Falls back to
/// `download.bin` when nothing usable remains.
///
/// # Examples
///
/// - `derive_filename("https://www.7-zip.org/a/7z2301-x64.exe")` → `"7z2301-x64.exe"`
/// - `derive_filename("https://winscp.net/download/WinSCP-6.1-Setup.exe/download")` → `"WinSCP-6.1-Setup.exe"`
pub fn derive_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(c) => c,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
