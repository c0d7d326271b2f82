//! Image URL extraction from exported Roam markdown.
//!
//! A source document is read once; every line mentioning the image host must
//! carry exactly one `![](url)` embed, otherwise the document is rejected.

mod scan;

pub use scan::{embedded_url, EMBED_CLOSE, EMBED_OPEN};

use crate::error::RunError;
use std::fs;
use std::path::{Path, PathBuf};

/// Substring identifying the only supported image host.
pub const HOST_MARKER: &str = "firebasestorage";

/// Extension the source document must carry.
pub const SOURCE_EXTENSION: &str = "md";

/// An exported page, read into memory line by line.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceDocument {
    /// Opens and reads a markdown export.
    ///
    /// Fails with `FileNotFound` if `path` is not a file and with
    /// `InvalidFileType` if its extension is not `.md` (any case).
    pub fn open(path: &Path) -> Result<Self, RunError> {
        if !path.is_file() {
            return Err(RunError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let is_markdown = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION));
        if !is_markdown {
            return Err(RunError::InvalidFileType {
                path: path.to_path_buf(),
                expected: SOURCE_EXTENSION,
            });
        }
        let text = fs::read_to_string(path).map_err(|source| RunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path, &text))
    }

    /// Builds a document from text already in memory.
    pub fn from_text(path: &Path, text: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown to the user (falls back to the full path).
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Lines mentioning the image host, trimmed, in document order.
    pub fn matching_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| l.contains(HOST_MARKER))
            .collect()
    }
}

/// Extracts one image URL per host-mentioning line, in document order.
///
/// Fails with `ExtractionMismatch` when any such line lacks a usable embed.
pub fn extract_image_urls(doc: &SourceDocument) -> Result<Vec<String>, RunError> {
    let lines = doc.matching_lines();
    let urls: Vec<String> = lines
        .iter()
        .filter_map(|line| embedded_url(line))
        .map(str::to_string)
        .collect();

    if urls.len() != lines.len() {
        tracing::warn!(
            path = %doc.path().display(),
            lines = lines.len(),
            urls = urls.len(),
            "embed count mismatch"
        );
        return Err(RunError::ExtractionMismatch {
            lines: lines.len(),
            urls: urls.len(),
            host: HOST_MARKER,
        });
    }

    tracing::debug!(path = %doc.path().display(), count = urls.len(), "extracted image urls");
    Ok(urls)
}
