//! Orchestrator: resolve and download every requested application in turn.
//!
//! Sequential by construction. Any per-application failure is logged with
//! the application key and stage, recorded as `Outcome::Skipped`, and the
//! loop moves on.

mod report;
mod selection;

pub use report::{Outcome, RunReport};
pub use selection::AppSelection;

use std::path::PathBuf;

use crate::catalog::{self, AppDescriptor};
use crate::downloader::Downloader;
use crate::error::InstdlError;
use crate::fetch::PageFetcher;
use crate::resolver::{CatalogResolver, Resolution, Resolver};
use crate::storage;
use crate::url_model::derive_filename;

/// Runs the per-application pipeline with the given collaborators.
pub struct Orchestrator<'a> {
    fetcher: &'a dyn PageFetcher,
    downloader: &'a dyn Downloader,
    output_dir: PathBuf,
    dry_run: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        fetcher: &'a dyn PageFetcher,
        downloader: &'a dyn Downloader,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            downloader,
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    /// Resolve only; no directories or files are created.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Processes every key in `selection`. Never fails as a whole.
    pub fn run(&self, selection: &AppSelection) -> RunReport {
        let mut report = RunReport::default();
        for key in selection.keys() {
            let span = tracing::info_span!("app", key = %key);
            let _guard = span.enter();

            let outcome = match self.process(key) {
                Ok(outcome) => outcome,
                Err(e) => {
                    match &e {
                        InstdlError::UnknownApplication(_) => {
                            tracing::warn!("unknown app: {}", key)
                        }
                        InstdlError::Network { .. } | InstdlError::Parse { .. } => {
                            tracing::warn!(stage = e.stage(), "skipping {}: {}", key, e)
                        }
                        InstdlError::Io { .. } => {
                            tracing::error!(stage = e.stage(), "skipping {}: {}", key, e)
                        }
                    }
                    Outcome::Skipped(e)
                }
            };
            report.push(key, outcome);
        }
        tracing::info!(
            succeeded = report.succeeded(),
            skipped = report.skipped(),
            "run finished"
        );
        report
    }

    fn process(&self, key: &str) -> Result<Outcome, InstdlError> {
        let app = catalog::lookup(key)
            .ok_or_else(|| InstdlError::UnknownApplication(key.to_string()))?;
        let resolution = self.resolve(app)?;
        let path = self.destination(app, &resolution);

        if self.dry_run {
            return Ok(Outcome::Resolved { resolution, path });
        }

        if let Some(dir) = path.parent() {
            storage::ensure_dir(dir)?;
        }
        let bytes = self.downloader.download(&resolution.url, &path)?;
        Ok(Outcome::Downloaded {
            resolution,
            path,
            bytes,
        })
    }

    fn resolve(&self, app: &AppDescriptor) -> Result<Resolution, InstdlError> {
        let resolution = CatalogResolver::new(app, self.fetcher).resolve()?;
        tracing::info!(
            "resolved {} {} -> {}",
            app.name,
            resolution.version,
            resolution.url
        );
        Ok(resolution)
    }

    /// `<output_dir>/<app-key>/<version>/<filename>`.
    fn destination(&self, app: &AppDescriptor, resolution: &Resolution) -> PathBuf {
        let filename = derive_filename(&resolution.url);
        storage::destination(&self.output_dir, app.key, &resolution.version, &filename)
    }
}

#[cfg(test)]
mod tests;
