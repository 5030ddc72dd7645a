//! `instdl --list` – show the catalog.

use anyhow::Result;
use instdl_core::catalog::{Strategy, CATALOG};

pub fn run_list() -> Result<()> {
    for app in CATALOG {
        let source = match app.strategy {
            Strategy::Static { url, .. } => url,
            Strategy::Scraped { page, .. } => page,
        };
        println!("{:<12} {:<26} {}", app.key, app.name, source);
    }
    Ok(())
}
