//! Per-application outcomes of a run.

use std::path::PathBuf;

use crate::error::InstdlError;
use crate::resolver::Resolution;

/// What happened to one requested application.
#[derive(Debug)]
pub enum Outcome {
    /// Installer written to `path`.
    Downloaded {
        resolution: Resolution,
        path: PathBuf,
        bytes: u64,
    },
    /// Dry run: resolved, nothing written.
    Resolved {
        resolution: Resolution,
        path: PathBuf,
    },
    /// Skipped; the run continued with the remaining applications.
    Skipped(InstdlError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Skipped(_))
    }
}

/// Outcomes in request order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub entries: Vec<(String, Outcome)>,
}

impl RunReport {
    pub fn push(&mut self, key: &str, outcome: Outcome) {
        self.entries.push((key.to_string(), outcome));
    }

    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn skipped(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    pub fn outcome(&self, key: &str) -> Option<&Outcome> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, o)| o)
    }
}
