//! Blocking HTTP GET for image bodies.
//!
//! Uses the curl crate (libcurl). One `Easy` handle is reused for the whole
//! run so connections to the storage host are kept alive between images.

use std::io;
use thiserror::Error;

/// Per-image download failure. Never fatal to the run.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Server answered with something other than 200.
    #[error("HTTP {status}")]
    Http { status: u32, body: String },
    /// Request did not complete (DNS, connect, TLS, reset).
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    /// Body arrived but could not be written to disk.
    #[error("write failed: {0}")]
    Storage(#[source] io::Error),
}

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Body as text for failure reports (invalid UTF-8 replaced).
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Source of image bodies. Implemented by [`Fetcher`]; tests substitute canned responses.
pub trait Fetch {
    fn get(&mut self, url: &str) -> Result<FetchResponse, curl::Error>;
}

pub struct Fetcher {
    easy: curl::easy::Easy,
}

impl Fetcher {
    /// Creates a client that identifies itself with `user_agent`.
    ///
    /// Redirects are followed; no timeouts are set beyond libcurl's defaults.
    pub fn new(user_agent: &str) -> Result<Self, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.useragent(user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        Ok(Self { easy })
    }
}

impl Fetch for Fetcher {
    fn get(&mut self, url: &str) -> Result<FetchResponse, curl::Error> {
        let mut body = Vec::new();
        self.easy.get(true)?;
        self.easy.url(url)?;
        {
            let mut transfer = self.easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let status = self.easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET complete");
        Ok(FetchResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_text_lossy() {
        let r = FetchResponse {
            status: 403,
            body: b"denied \xff".to_vec(),
        };
        assert_eq!(r.body_text(), "denied \u{fffd}");
    }

    #[test]
    fn download_error_display() {
        let e = DownloadError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 404");
        let e = DownloadError::Storage(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(e.to_string(), "write failed: disk full");
    }
}
