//! Disk layout and file lifecycle.
//!
//! Installers land in `<root>/<app-key>/<version>/<filename>`. Bytes are
//! streamed into a `.part` file that is renamed over the final path once the
//! transfer succeeds, so an interrupted run never leaves a truncated
//! installer under the real name.

mod writer;

pub use writer::StorageWriter;

use std::path::{Path, PathBuf};

use crate::catalog::UNKNOWN;
use crate::error::InstdlError;
use crate::url_model::sanitize_filename;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `Webex.msi` → `Webex.msi.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Folder for one application version: `<root>/<app-key>/<version>`.
///
/// The version comes from remote content, so it is sanitized into a single
/// path component; an empty result becomes `unknown`.
pub fn version_dir(root: &Path, app_key: &str, version: &str) -> PathBuf {
    let v = sanitize_filename(version);
    let v = if v.is_empty() { UNKNOWN.to_string() } else { v };
    root.join(app_key).join(v)
}

/// Full destination path: `<root>/<app-key>/<version>/<filename>`.
pub fn destination(root: &Path, app_key: &str, version: &str, filename: &str) -> PathBuf {
    version_dir(root, app_key, version).join(filename)
}

/// Create `dir` and its parents if missing. Idempotent.
pub fn ensure_dir(dir: &Path) -> Result<(), InstdlError> {
    std::fs::create_dir_all(dir).map_err(|e| InstdlError::io(dir, e))
}
