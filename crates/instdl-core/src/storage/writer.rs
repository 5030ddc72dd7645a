//! Sequential writer for temp download files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::InstdlError;

/// Writer for a `.part` download file. Bytes are appended in arrival order.
pub struct StorageWriter {
    file: BufWriter<File>,
    temp_path: PathBuf,
    written: u64,
}

impl StorageWriter {
    /// Create a new temp file at `temp_path` (e.g. `destination.part`).
    /// Truncates if the path already exists.
    pub fn create(temp_path: &Path) -> Result<Self, InstdlError> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .map_err(|e| InstdlError::io(temp_path, e))?;
        Ok(StorageWriter {
            file: BufWriter::new(file),
            temp_path: temp_path.to_path_buf(),
            written: 0,
        })
    }

    /// Append `data` at the current end of the file.
    pub fn append(&mut self, data: &[u8]) -> Result<(), InstdlError> {
        self.file
            .write_all(data)
            .map_err(|e| InstdlError::io(&self.temp_path, e))?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Bytes appended so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush, sync, and rename the temp file over `final_path`. Consumes the writer.
    /// Fails if `final_path` is on a different filesystem. On any failure the
    /// temp file is removed.
    pub fn finalize(self, final_path: &Path) -> Result<(), InstdlError> {
        let temp_path = self.temp_path;
        let result = commit(self.file, &temp_path, final_path);
        if result.is_err() {
            remove_temp(&temp_path);
        }
        result
    }

    /// Drop the writer and remove the temp file. Errors are logged, not returned.
    pub fn discard(self) {
        let temp_path = self.temp_path;
        drop(self.file);
        remove_temp(&temp_path);
    }
}

fn commit(file: BufWriter<File>, temp_path: &Path, final_path: &Path) -> Result<(), InstdlError> {
    let file = file
        .into_inner()
        .map_err(|e| InstdlError::io(temp_path, e.into_error()))?;
    file.sync_all().map_err(|e| InstdlError::io(temp_path, e))?;
    drop(file);

    std::fs::rename(temp_path, final_path).map_err(|e| InstdlError::io(final_path, e))
}

fn remove_temp(temp_path: &Path) {
    if let Err(e) = std::fs::remove_file(temp_path) {
        tracing::debug!("could not remove {}: {}", temp_path.display(), e);
    }
}
