//! CLI for instdl.

mod commands;

use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;
use instdl_core::config::{self, InstdlConfig};
use instdl_core::orchestrator::AppSelection;
use std::path::PathBuf;

use commands::{run_completions, run_fetch, run_list};

/// Download the current installers of common Windows applications into
/// `<app>/<version>/` folders.
#[derive(Debug, Parser)]
#[command(name = "instdl")]
#[command(about = "Fetch current Windows installers into <app>/<version>/ folders", long_about = None)]
pub struct Cli {
    /// Comma-separated list of apps: 7zip,notepad,chrome,winscp,webex,zoom,zoomoutlook.
    #[arg(long, value_name = "APPS")]
    pub apps: Option<String>,

    /// Download all apps.
    #[arg(long)]
    pub all: bool,

    /// Download 7-Zip.
    #[arg(long = "7zip")]
    pub sevenzip: bool,

    /// Download Notepad++.
    #[arg(long)]
    pub notepad: bool,

    /// Download Google Chrome Enterprise.
    #[arg(long)]
    pub chrome: bool,

    /// Download WinSCP.
    #[arg(long)]
    pub winscp: bool,

    /// Download Webex.
    #[arg(long)]
    pub webex: bool,

    /// Download Zoom.
    #[arg(long)]
    pub zoom: bool,

    /// Download the Zoom Outlook plugin.
    #[arg(long)]
    pub zoomoutlook: bool,

    /// Root folder for downloads (default: config `output_dir`, else the current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Resolve URLs and versions without downloading.
    #[arg(long)]
    pub dry_run: bool,

    /// List the supported applications and exit.
    #[arg(long)]
    pub list: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Keys switched on by the per-app boolean flags.
    pub fn flagged_apps(&self) -> Vec<&'static str> {
        [
            (self.sevenzip, "7zip"),
            (self.notepad, "notepad"),
            (self.chrome, "chrome"),
            (self.winscp, "winscp"),
            (self.webex, "webex"),
            (self.zoom, "zoom"),
            (self.zoomoutlook, "zoomoutlook"),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, key)| key)
        .collect()
    }

    /// Union of `--all`, `--apps` and per-app flags, deduplicated.
    pub fn selection(&self) -> AppSelection {
        AppSelection::build(self.all, self.apps.as_deref(), self.flagged_apps())
    }

    /// `--output-dir`, else the config value, else the current directory.
    pub fn resolve_output_dir(&self, cfg: &InstdlConfig) -> Result<PathBuf> {
        match self.output_dir.as_ref().or(cfg.output_dir.as_ref()) {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

fn load_config() -> InstdlConfig {
    match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("could not load config ({:#}), using defaults", e);
            InstdlConfig::default()
        }
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        return run_completions(shell);
    }
    if cli.list {
        return run_list();
    }

    let cfg = load_config();
    tracing::debug!("loaded config: {:?}", cfg);
    let output_dir = cli.resolve_output_dir(&cfg)?;
    run_fetch(&cfg, &cli.selection(), &output_dir, cli.dry_run)
}

#[cfg(test)]
mod tests;
