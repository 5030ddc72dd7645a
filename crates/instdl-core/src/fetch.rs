//! Vendor page fetching.
//!
//! One GET per call through libcurl (via the `curl` crate). Redirects are
//! followed by curl itself; there is no retry.

use crate::config::HttpOptions;
use crate::error::InstdlError;

/// Fetches a page body as text.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, InstdlError>;
}

/// `PageFetcher` backed by a fresh curl easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    opts: HttpOptions,
}

impl CurlFetcher {
    pub fn new(opts: HttpOptions) -> Self {
        Self { opts }
    }
}

impl PageFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<String, InstdlError> {
        tracing::debug!(url, "fetching page");
        let body = get_body(url, &self.opts).map_err(|e| InstdlError::network(url, e))?;
        tracing::debug!(url, bytes = body.len(), "page fetched");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Performs the GET and returns the raw body, or a human-readable failure reason.
fn get_body(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, String> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(|e| format!("invalid URL: {}", e))?;
    easy.follow_location(true).map_err(|e| e.to_string())?;
    easy.max_redirections(10).map_err(|e| e.to_string())?;
    easy.useragent(&opts.user_agent).map_err(|e| e.to_string())?;
    easy.connect_timeout(opts.connect_timeout)
        .map_err(|e| e.to_string())?;
    easy.timeout(opts.timeout).map_err(|e| e.to_string())?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(|e| e.to_string())?;
        transfer.perform().map_err(|e| e.to_string())?;
    }

    let code = easy.response_code().map_err(|e| e.to_string())?;
    if !(200..300).contains(&code) {
        return Err(format!("HTTP {}", code));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn opts() -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(1),
            timeout: Duration::from_secs(2),
            user_agent: "instdl-test".to_string(),
        }
    }

    #[test]
    fn invalid_url_is_network_error() {
        let f = CurlFetcher::new(opts());
        match f.fetch("notascheme://\u{0}") {
            Err(InstdlError::Network { url, .. }) => assert_eq!(url, "notascheme://\u{0}"),
            other => panic!("expected Network error, got {:?}", other),
        }
    }

    #[test]
    fn refused_connection_is_network_error() {
        // Bind then drop to get a port with nothing listening.
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let f = CurlFetcher::new(opts());
        let err = f
            .fetch(&format!("http://127.0.0.1:{}/", port))
            .unwrap_err();
        assert_eq!(err.stage(), "network");
    }
}
