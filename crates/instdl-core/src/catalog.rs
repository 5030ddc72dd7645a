//! Static catalog of supported applications and how to resolve each one.
//!
//! Adding a vendor means adding one `AppDescriptor` to `CATALOG`; the
//! resolver interprets the strategy, no per-vendor code is needed.

/// How the download URL of an application is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Fixed URL that always points at the current release.
    Static {
        url: &'static str,
        version: VersionSource,
    },
    /// URL scraped from a vendor page.
    Scraped {
        /// Page to fetch.
        page: &'static str,
        /// Regex over the raw page text. Group 1 is the link, group 2 the raw version.
        pattern: &'static str,
        /// Regex over individual anchor hrefs, tried when `pattern` finds nothing.
        /// Same group layout as `pattern`.
        href: &'static str,
        link: LinkRule,
        version: VersionRule,
    },
}

/// Version of a static-URL application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Fixed(&'static str),
    /// Look the version up in a JSON document; use `fallback` on any failure.
    JsonEndpoint {
        url: &'static str,
        /// RFC 6901 pointer to a string field.
        pointer: &'static str,
        fallback: &'static str,
    },
}

/// How the matched link becomes the download URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRule {
    /// Join the link with the page URL.
    RelativeToPage,
    /// Fill `{tag}` (the matched link, group 1) and `{version}` (derived version).
    Template(&'static str),
}

/// How the raw matched version becomes the stored version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRule {
    AsIs,
    StripLeadingV,
    /// Insert a dot after the first `major` digits: `"2301"` -> `"23.01"`.
    SplitDigits { major: usize },
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    /// CLI key and storage folder name.
    pub key: &'static str,
    pub name: &'static str,
    pub strategy: Strategy,
}

/// Version label for static URLs that always serve the newest build.
pub const LATEST: &str = "latest";
/// Version label when a version could not be derived.
pub const UNKNOWN: &str = "unknown";

pub const CATALOG: &[AppDescriptor] = &[
    AppDescriptor {
        key: "7zip",
        name: "7-Zip",
        strategy: Strategy::Scraped {
            page: "https://www.7-zip.org/download.html",
            pattern: r#"href="(a/7z(\d+)-x64\.exe)""#,
            href: r"^(a/7z(\d+)-x64\.exe)$",
            link: LinkRule::RelativeToPage,
            version: VersionRule::SplitDigits { major: 2 },
        },
    },
    AppDescriptor {
        key: "notepad",
        name: "Notepad++",
        strategy: Strategy::Scraped {
            page: "https://notepad-plus-plus.org/downloads/",
            pattern: r#"href="/downloads/(v([\d.]+))/""#,
            href: r"^/downloads/(v([\d.]+))/$",
            link: LinkRule::Template(
                "https://github.com/notepad-plus-plus/notepad-plus-plus/releases/download/{tag}/npp.{version}.Installer.x64.exe",
            ),
            version: VersionRule::StripLeadingV,
        },
    },
    AppDescriptor {
        key: "chrome",
        name: "Google Chrome Enterprise",
        strategy: Strategy::Static {
            url: "https://dl.google.com/dl/chrome/install/googlechromestandaloneenterprise64.msi",
            version: VersionSource::JsonEndpoint {
                url: "https://versionhistory.googleapis.com/v1/chrome/platforms/win/channels/stable/versions/all/releases?filter=endtime=none",
                pointer: "/releases/0/version",
                fallback: LATEST,
            },
        },
    },
    AppDescriptor {
        key: "winscp",
        name: "WinSCP",
        strategy: Strategy::Scraped {
            page: "https://winscp.net/eng/download.php",
            pattern: r#"href="(/download/WinSCP-([\d.]+)-Setup\.exe/download)""#,
            href: r"^(/download/WinSCP-([\d.]+)-Setup\.exe/download)$",
            link: LinkRule::RelativeToPage,
            version: VersionRule::AsIs,
        },
    },
    AppDescriptor {
        key: "webex",
        name: "Webex",
        strategy: Strategy::Static {
            url: "https://binaries.webex.com/WebexTeamsDesktop-Windows-Gold/Webex.msi",
            version: VersionSource::Fixed(LATEST),
        },
    },
    AppDescriptor {
        key: "zoom",
        name: "Zoom",
        strategy: Strategy::Static {
            url: "https://zoom.us/client/latest/ZoomInstallerFull.msi",
            version: VersionSource::Fixed(LATEST),
        },
    },
    AppDescriptor {
        key: "zoomoutlook",
        name: "Zoom Outlook Plugin",
        strategy: Strategy::Static {
            url: "https://zoom.us/client/latest/ZoomOutlookPluginSetup.msi",
            version: VersionSource::Fixed(LATEST),
        },
    },
];

/// Catalog entry for `key`, if any.
pub fn lookup(key: &str) -> Option<&'static AppDescriptor> {
    CATALOG.iter().find(|d| d.key == key)
}

/// All keys in catalog order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|d| d.key)
}
