//! Fatal run errors.
//!
//! Every variant here ends the run before (or instead of) further work.
//! A failed download of a single image is not fatal and is reported through
//! [`crate::fetch::DownloadError`] instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// Source document does not exist.
    #[error("file not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// Source document exists but does not carry the markdown extension.
    #[error("'{}' is not a .{expected} file", path.display())]
    InvalidFileType {
        path: PathBuf,
        expected: &'static str,
    },

    /// Source document could not be read.
    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Lines mentioning the image host and extracted URLs disagree; the
    /// document does not use the expected `![](url)` embed form.
    #[error(
        "{lines} line(s) reference {host} but {urls} image URL(s) were extracted; \
         expected one `![](url)` embed per line"
    )]
    ExtractionMismatch {
        lines: usize,
        urls: usize,
        host: &'static str,
    },

    /// An extracted string is not a well-formed HTTP(S) URL.
    #[error("invalid image URL: '{url}'")]
    InvalidUrl { url: String },

    /// User answered no to the download confirmation.
    #[error("download cancelled")]
    ConfirmationDenied,

    /// Too many unrecognized answers to an interactive prompt.
    #[error("no valid answer after {attempts} attempt(s); run the program again to retry")]
    PromptExhausted { attempts: u32 },

    /// The HTTP client could not be configured.
    #[error("failed to set up HTTP client")]
    HttpClient(#[source] curl::Error),

    /// URL validation pattern failed to compile.
    #[error("URL pattern failed to compile")]
    Pattern(#[from] regex::Error),

    /// Console I/O failed while prompting or reporting.
    #[error("console I/O failed")]
    Io(#[from] io::Error),
}
