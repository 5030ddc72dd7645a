//! Resolvers: turn a catalog entry into a direct installer URL and version.
//!
//! The orchestrator only depends on the `Resolver` trait; `CatalogResolver`
//! interprets a `Strategy` from the catalog using a `PageFetcher`.

mod version;

pub use version::derive_version;

use regex::Regex;

use crate::catalog::{AppDescriptor, LinkRule, Strategy, VersionRule, VersionSource};
use crate::error::InstdlError;
use crate::extract::{first_capture, first_matching_href, resolve_url};
use crate::fetch::PageFetcher;

/// Direct download URL plus the version used for the storage folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    /// Real version, `"latest"` or `"unknown"`.
    pub version: String,
}

/// Anything that can produce a `Resolution` for one application.
pub trait Resolver {
    fn resolve(&self) -> Result<Resolution, InstdlError>;
}

/// Resolver for one catalog entry.
pub struct CatalogResolver<'a, F: PageFetcher + ?Sized> {
    app: &'a AppDescriptor,
    fetcher: &'a F,
}

impl<'a, F: PageFetcher + ?Sized> CatalogResolver<'a, F> {
    pub fn new(app: &'a AppDescriptor, fetcher: &'a F) -> Self {
        Self { app, fetcher }
    }
}

impl<F: PageFetcher + ?Sized> Resolver for CatalogResolver<'_, F> {
    fn resolve(&self) -> Result<Resolution, InstdlError> {
        match self.app.strategy {
            Strategy::Static { url, version } => Ok(Resolution {
                url: url.to_string(),
                version: static_version(version, self.fetcher),
            }),
            Strategy::Scraped {
                page,
                pattern,
                href,
                link,
                version,
            } => resolve_scraped(self.fetcher, page, pattern, href, link, version),
        }
    }
}

fn static_version<F: PageFetcher + ?Sized>(source: VersionSource, fetcher: &F) -> String {
    match source {
        VersionSource::Fixed(v) => v.to_string(),
        VersionSource::JsonEndpoint {
            url,
            pointer,
            fallback,
        } => match json_version(fetcher, url, pointer) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "version lookup failed, using {:?}", fallback);
                fallback.to_string()
            }
        },
    }
}

/// String at `pointer` in the JSON document at `url`.
fn json_version<F: PageFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    pointer: &str,
) -> Result<String, InstdlError> {
    let body = fetcher.fetch(url)?;
    let doc: serde_json::Value = serde_json::from_str(&body)
        .map_err(|e| InstdlError::parse(url, format!("JSON document ({})", e)))?;
    doc.pointer(pointer)
        .and_then(|v| v.as_str())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| InstdlError::parse(url, format!("string field {}", pointer)))
}

fn compile(page: &str, pattern: &str) -> Result<Regex, InstdlError> {
    Regex::new(pattern).map_err(|e| InstdlError::parse(page, format!("usable pattern ({})", e)))
}

fn resolve_scraped<F: PageFetcher + ?Sized>(
    fetcher: &F,
    page: &str,
    pattern: &str,
    href: &str,
    link: LinkRule,
    rule: VersionRule,
) -> Result<Resolution, InstdlError> {
    let text = fetcher.fetch(page)?;

    let raw_re = compile(page, pattern)?;
    let matched = match first_capture(&text, &raw_re) {
        Some(m) => m,
        None => {
            let href_re = compile(page, href)?;
            let m = first_matching_href(&text, &href_re)
                .ok_or_else(|| InstdlError::parse(page, "installer link"))?;
            tracing::debug!(page, "raw pattern missed, matched via anchor list");
            m
        }
    };

    let version = derive_version(&matched.version, rule);
    let url = match link {
        LinkRule::RelativeToPage => resolve_url(page, &matched.link)?,
        LinkRule::Template(t) => t
            .replace("{tag}", &matched.link)
            .replace("{version}", &version),
    };
    tracing::debug!(%url, %version, "resolved");
    Ok(Resolution { url, version })
}
