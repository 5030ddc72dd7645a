//! Requested application set.

use crate::catalog;

/// Deduplicated application keys in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSelection {
    keys: Vec<String>,
}

impl AppSelection {
    /// Union of `--all`, a comma-separated `--apps` list and per-app flags.
    ///
    /// Entries are trimmed, empty entries dropped, duplicates removed with
    /// the first occurrence kept. Keys are not validated here; unknown keys
    /// are reported by the orchestrator.
    pub fn build<'a>(
        all: bool,
        apps_csv: Option<&str>,
        flagged: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut sel = AppSelection::default();
        if all {
            for key in catalog::keys() {
                sel.push(key);
            }
        }
        if let Some(csv) = apps_csv {
            for key in csv.split(',') {
                sel.push(key);
            }
        }
        for key in flagged {
            sel.push(key);
        }
        sel
    }

    /// Add `key` unless it is empty or already selected.
    pub fn push(&mut self, key: &str) {
        let key = key.trim();
        if key.is_empty() || self.keys.iter().any(|k| k == key) {
            return;
        }
        self.keys.push(key.to_string());
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}
