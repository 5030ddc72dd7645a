//! Default action – resolve and download the selected applications.

use anyhow::Result;
use instdl_core::config::InstdlConfig;
use instdl_core::downloader::CurlDownloader;
use instdl_core::fetch::CurlFetcher;
use instdl_core::orchestrator::{AppSelection, Orchestrator, Outcome, RunReport};
use std::path::Path;

pub fn run_fetch(
    cfg: &InstdlConfig,
    selection: &AppSelection,
    output_dir: &Path,
    dry_run: bool,
) -> Result<()> {
    if selection.is_empty() {
        println!("No applications requested. Use --apps, --all or a per-app flag (see --help).");
        return Ok(());
    }

    let fetcher = CurlFetcher::new(cfg.page_http());
    let downloader = CurlDownloader::new(cfg.download_http());
    let orchestrator = Orchestrator::new(&fetcher, &downloader, output_dir).dry_run(dry_run);

    tracing::info!(
        apps = selection.len(),
        dir = %output_dir.display(),
        dry_run,
        "starting run"
    );
    let report = orchestrator.run(selection);
    print_report(&report);
    Ok(())
}

fn print_report(report: &RunReport) {
    for (key, outcome) in &report.entries {
        match outcome {
            Outcome::Downloaded {
                resolution,
                path,
                bytes,
            } => println!(
                "{:<12} {:<16} {} ({:.1} MiB)",
                key,
                resolution.version,
                path.display(),
                *bytes as f64 / 1_048_576.0
            ),
            Outcome::Resolved { resolution, path } => println!(
                "{:<12} {:<16} {} -> {}",
                key,
                resolution.version,
                resolution.url,
                path.display()
            ),
            Outcome::Skipped(e) => println!("{:<12} skipped: {}", key, e),
        }
    }
    println!(
        "{} succeeded, {} skipped",
        report.succeeded(),
        report.skipped()
    );
}
