//! Single-stream HTTP GET downloader.
//!
//! Writes the response body sequentially into `<dest>.part` and renames it
//! over `dest` when the transfer completes with a 2xx status. One attempt
//! only; the caller decides what a failure means for the run.

use std::path::Path;

use crate::config::HttpOptions;
use crate::error::InstdlError;
use crate::storage::{temp_path, StorageWriter};

/// Transfers a URL to a local path.
pub trait Downloader {
    /// Returns the number of bytes written to `dest`.
    fn download(&self, url: &str, dest: &Path) -> Result<u64, InstdlError>;
}

/// `Downloader` backed by a curl easy handle per transfer.
#[derive(Debug, Clone)]
pub struct CurlDownloader {
    opts: HttpOptions,
}

impl CurlDownloader {
    pub fn new(opts: HttpOptions) -> Self {
        Self { opts }
    }
}

impl Downloader for CurlDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<u64, InstdlError> {
        tracing::info!("downloading {} from {}", dest.display(), url);
        let mut storage = StorageWriter::create(&temp_path(dest))?;

        match transfer(url, &self.opts, &mut storage) {
            Ok(()) => {
                let written = storage.written();
                storage.finalize(dest)?;
                tracing::info!("downloaded {} ({} bytes)", dest.display(), written);
                Ok(written)
            }
            Err(e) => {
                storage.discard();
                Err(e)
            }
        }
    }
}

fn transfer(url: &str, opts: &HttpOptions, storage: &mut StorageWriter) -> Result<(), InstdlError> {
    let curl_err = |e: curl::Error| InstdlError::network(url, e);
    // Storage failures abort the transfer from inside the callback; keep the
    // real error so it is reported as Io rather than as a curl write error.
    let mut write_error: Option<InstdlError> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    easy.useragent(&opts.user_agent).map_err(curl_err)?;
    easy.connect_timeout(opts.connect_timeout).map_err(curl_err)?;
    easy.low_speed_limit(1024).map_err(curl_err)?;
    easy.low_speed_time(std::time::Duration::from_secs(60))
        .map_err(curl_err)?;
    easy.timeout(opts.timeout).map_err(curl_err)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match storage.append(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    tracing::warn!("download write failed: {}", e);
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(curl_err)?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(e);
    }
    performed.map_err(curl_err)?;

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        return Err(InstdlError::network(url, format!("HTTP {}", code)));
    }
    Ok(())
}
