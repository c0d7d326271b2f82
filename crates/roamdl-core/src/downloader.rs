//! Sequential image downloads with numbered file names.
//!
//! Images are fetched one at a time in document order. A failed download is
//! reported and skipped; only console failures or an exhausted overwrite
//! prompt stop the run.

use crate::console::{Confirmation, Console};
use crate::error::RunError;
use crate::fetch::{DownloadError, Fetch};
use crate::pipeline::DownloadPlan;
use crate::storage;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// What happened to one image.
#[derive(Debug)]
pub enum DownloadOutcome {
    Saved { path: PathBuf, bytes: usize },
    /// Target existed and the user chose not to overwrite it.
    Skipped { path: PathBuf },
    Failed { url: String, error: DownloadError },
}

impl DownloadOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadOutcome::Saved { .. })
    }
}

/// Downloads every URL in the plan, in order.
pub fn download_all<F: Fetch, R: BufRead, W: Write>(
    plan: &DownloadPlan,
    fetcher: &mut F,
    console: &mut Console<R, W>,
    attempts: u32,
) -> Result<Vec<DownloadOutcome>, RunError> {
    let total = plan.urls.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, url) in plan.urls.iter().enumerate() {
        let index = i + 1;
        let name = plan.naming.file_name(index);
        let path = plan.dest_dir.join(&name);

        if path.exists() && !plan.assume_yes {
            let question = format!("{} already exists. Overwrite it?", name);
            match console.confirm(&question, attempts)? {
                Confirmation::Confirmed => {}
                Confirmation::Declined => {
                    console.say(&format!("Skipped {} ({}/{})", name, index, total))?;
                    tracing::info!(path = %path.display(), index, "kept existing file");
                    outcomes.push(DownloadOutcome::Skipped { path });
                    continue;
                }
                Confirmation::Exhausted => {
                    return Err(RunError::PromptExhausted {
                        attempts: attempts.max(1),
                    })
                }
            }
        }

        match fetch_to(fetcher, url, &path) {
            Ok(bytes) => {
                console.say(&format!("Saved {} ({}/{})", name, index, total))?;
                tracing::info!(url = %url, path = %path.display(), bytes, index, "saved image");
                outcomes.push(DownloadOutcome::Saved { path, bytes });
            }
            Err(error) => {
                console.say(&format!(
                    "Failed to download image {}/{} ({}): {}",
                    index, total, name, error
                ))?;
                if let DownloadError::Http { body, .. } = &error {
                    console.say(&format!("Response: {}", body))?;
                }
                match &error {
                    DownloadError::Http { status, .. } => {
                        tracing::warn!(url = %url, index, status, "download failed: {}", error)
                    }
                    _ => tracing::warn!(url = %url, index, "download failed: {}", error),
                }
                outcomes.push(DownloadOutcome::Failed {
                    url: url.clone(),
                    error,
                });
            }
        }
    }

    Ok(outcomes)
}

/// GETs `url` and writes the body to `path` only on HTTP 200.
fn fetch_to<F: Fetch>(fetcher: &mut F, url: &str, path: &Path) -> Result<usize, DownloadError> {
    let response = fetcher.get(url)?;
    if response.status != 200 {
        return Err(DownloadError::Http {
            status: response.status,
            body: response.body_text(),
        });
    }
    storage::write_file(path, &response.body).map_err(DownloadError::Storage)?;
    Ok(response.body.len())
}
