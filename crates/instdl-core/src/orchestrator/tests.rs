use super::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

const SEVENZIP_PAGE: &str = "https://www.7-zip.org/download.html";
const NOTEPAD_PAGE: &str = "https://notepad-plus-plus.org/downloads/";
const WINSCP_PAGE: &str = "https://winscp.net/eng/download.php";

#[derive(Default)]
struct FakeFetcher {
    pages: HashMap<&'static str, &'static str>,
    calls: RefCell<Vec<String>>,
}

impl PageFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<String, InstdlError> {
        self.calls.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .map(|s| s.to_string())
            .ok_or_else(|| InstdlError::network(url, "could not resolve host"))
    }
}

/// Writes the URL as file content; fails for URLs listed in `fail`.
#[derive(Default)]
struct FakeDownloader {
    fail: Vec<&'static str>,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl Downloader for FakeDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<u64, InstdlError> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), dest.to_path_buf()));
        if self.fail.iter().any(|f| *f == url) {
            return Err(InstdlError::network(url, "HTTP 503"));
        }
        std::fs::write(dest, url.as_bytes()).map_err(|e| InstdlError::io(dest, e))?;
        Ok(url.len() as u64)
    }
}

fn vendor_pages() -> FakeFetcher {
    let mut f = FakeFetcher::default();
    f.pages
        .insert(SEVENZIP_PAGE, r#"<a href="a/7z2301-x64.exe">Download</a>"#);
    f.pages
        .insert(NOTEPAD_PAGE, r#"<a href="/downloads/v8.6.2/">8.6.2</a>"#);
    f.pages.insert(
        WINSCP_PAGE,
        r#"<a href="/download/WinSCP-6.1-Setup.exe/download">WinSCP</a>"#,
    );
    f
}

#[test]
fn downloads_into_app_version_folders() {
    let out = tempfile::tempdir().unwrap();
    let fetcher = vendor_pages();
    let downloader = FakeDownloader::default();
    let orch = Orchestrator::new(&fetcher, &downloader, out.path());

    let report = orch.run(&AppSelection::build(false, Some("7zip,notepad,zoom"), []));
    assert_eq!(report.succeeded(), 3);

    let p = out.path().join("7zip").join("23.01").join("7z2301-x64.exe");
    assert_eq!(
        std::fs::read_to_string(&p).unwrap(),
        "https://www.7-zip.org/a/7z2301-x64.exe"
    );
    assert!(out
        .path()
        .join("notepad")
        .join("8.6.2")
        .join("npp.8.6.2.Installer.x64.exe")
        .is_file());
    assert!(out
        .path()
        .join("zoom")
        .join("latest")
        .join("ZoomInstallerFull.msi")
        .is_file());
}

#[test]
fn winscp_stored_without_download_suffix() {
    let out = tempfile::tempdir().unwrap();
    let fetcher = vendor_pages();
    let downloader = FakeDownloader::default();
    let orch = Orchestrator::new(&fetcher, &downloader, out.path());

    let report = orch.run(&AppSelection::build(false, None, ["winscp"]));
    match report.outcome("winscp") {
        Some(Outcome::Downloaded {
            resolution, path, ..
        }) => {
            assert!(resolution.url.ends_with("/download"));
            assert_eq!(
                path,
                &out.path().join("winscp").join("6.1").join("WinSCP-6.1-Setup.exe")
            );
        }
        other => panic!("expected Downloaded, got {:?}", other),
    }
    let calls = downloader.calls.borrow();
    assert_eq!(
        calls[0].0,
        "https://winscp.net/download/WinSCP-6.1-Setup.exe/download"
    );
}

#[test]
fn fetch_failure_skips_and_continues() {
    let out = tempfile::tempdir().unwrap();
    let mut fetcher = vendor_pages();
    fetcher.pages.remove(NOTEPAD_PAGE);
    let downloader = FakeDownloader::default();
    let orch = Orchestrator::new(&fetcher, &downloader, out.path());

    let report = orch.run(&AppSelection::build(false, Some("notepad,7zip"), []));
    assert!(matches!(
        report.outcome("notepad"),
        Some(Outcome::Skipped(InstdlError::Network { .. }))
    ));
    assert!(matches!(
        report.outcome("7zip"),
        Some(Outcome::Downloaded { .. })
    ));
    assert_eq!(downloader.calls.borrow().len(), 1);
    assert!(!out.path().join("notepad").exists());
}

#[test]
fn pattern_missing_is_skipped() {
    let out = tempfile::tempdir().unwrap();
    let mut fetcher = vendor_pages();
    fetcher.pages.insert(SEVENZIP_PAGE, "<html>redesigned</html>");
    let downloader = FakeDownloader::default();
    let orch = Orchestrator::new(&fetcher, &downloader, out.path());

    let report = orch.run(&AppSelection::build(false, Some("7zip,webex"), []));
    assert!(matches!(
        report.outcome("7zip"),
        Some(Outcome::Skipped(InstdlError::Parse { .. }))
    ));
    assert_eq!(report.succeeded(), 1);
}

#[test]
fn download_failure_does_not_abort_run() {
    let out = tempfile::tempdir().unwrap();
    let fetcher = vendor_pages();
    let downloader = FakeDownloader {
        fail: vec!["https://zoom.us/client/latest/ZoomInstallerFull.msi"],
        ..Default::default()
    };
    let orch = Orchestrator::new(&fetcher, &downloader, out.path());

    let report = orch.run(&AppSelection::build(false, Some("zoom,zoomoutlook"), []));
    assert!(matches!(report.outcome("zoom"), Some(Outcome::Skipped(_))));
    assert!(matches!(
        report.outcome("zoomoutlook"),
        Some(Outcome::Downloaded { .. })
    ));
    assert_eq!(report.skipped(), 1);
}

#[test]
fn unknown_key_is_skipped() {
    let out = tempfile::tempdir().unwrap();
    let fetcher = vendor_pages();
    let downloader = FakeDownloader::default();
    let orch = Orchestrator::new(&fetcher, &downloader, out.path());

    let report = orch.run(&AppSelection::build(false, Some("firefox,webex"), []));
    match report.outcome("firefox") {
        Some(Outcome::Skipped(InstdlError::UnknownApplication(k))) => assert_eq!(k, "firefox"),
        other => panic!("expected UnknownApplication, got {:?}", other),
    }
    assert_eq!(report.succeeded(), 1);
    assert!(fetcher.calls.borrow().is_empty());
}

#[test]
fn duplicate_request_downloads_once() {
    let out = tempfile::tempdir().unwrap();
    let fetcher = vendor_pages();
    let downloader = FakeDownloader::default();
    let orch = Orchestrator::new(&fetcher, &downloader, out.path());

    let report = orch.run(&AppSelection::build(false, Some("7zip,7zip"), ["7zip"]));
    assert_eq!(report.entries.len(), 1);
    assert_eq!(fetcher.calls.borrow().len(), 1);
    assert_eq!(downloader.calls.borrow().len(), 1);
}

#[test]
fn dry_run_writes_nothing() {
    let out = tempfile::tempdir().unwrap();
    let fetcher = vendor_pages();
    let downloader = FakeDownloader::default();
    let orch = Orchestrator::new(&fetcher, &downloader, out.path()).dry_run(true);

    let report = orch.run(&AppSelection::build(false, Some("7zip,webex"), []));
    match report.outcome("7zip") {
        Some(Outcome::Resolved { resolution, path }) => {
            assert_eq!(resolution.version, "23.01");
            assert_eq!(path, &out.path().join("7zip").join("23.01").join("7z2301-x64.exe"));
        }
        other => panic!("expected Resolved, got {:?}", other),
    }
    assert!(downloader.calls.borrow().is_empty());
    assert!(!out.path().join("7zip").exists());
}

#[test]
fn rerun_overwrites_existing_file() {
    let out = tempfile::tempdir().unwrap();
    let fetcher = vendor_pages();
    let downloader = FakeDownloader::default();
    let orch = Orchestrator::new(&fetcher, &downloader, out.path());
    let target = out.path().join("webex").join("latest").join("Webex.msi");
    std::fs::create_dir_all(target.parent().unwrap()).unwrap();
    std::fs::write(&target, b"stale").unwrap();

    let report = orch.run(&AppSelection::build(false, None, ["webex"]));
    assert_eq!(report.succeeded(), 1);
    assert_eq!(
        std::fs::read_to_string(&target).unwrap(),
        "https://binaries.webex.com/WebexTeamsDesktop-Windows-Gold/Webex.msi"
    );
}
