//! Extract → validate → confirm → download, strictly in that order.

use crate::config::RoamdlConfig;
use crate::console::Console;
use crate::downloader::{self, DownloadOutcome};
use crate::error::RunError;
use crate::extractor::{self, SourceDocument};
use crate::fetch::{Fetch, Fetcher};
use crate::gate;
use crate::naming::OutputNaming;
use crate::validator::UrlValidator;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Options given on the command line for one run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Exported markdown page to scan.
    pub file: PathBuf,
    /// Output filename prefix (empty for bare numbers).
    pub base_name: String,
    /// Skip every interactive prompt.
    pub assume_yes: bool,
}

/// Everything needed to confirm and perform the downloads.
#[derive(Debug, Clone)]
pub struct DownloadPlan {
    pub source_name: String,
    /// Validated image URLs in document order.
    pub urls: Vec<String>,
    pub naming: OutputNaming,
    pub dest_dir: PathBuf,
    pub assume_yes: bool,
}

/// Reads the source document and returns its validated image URLs.
pub fn list_urls(opts: &RunOptions) -> Result<Vec<String>, RunError> {
    let doc = SourceDocument::open(&opts.file)?;
    extract_and_validate(&doc)
}

fn extract_and_validate(doc: &SourceDocument) -> Result<Vec<String>, RunError> {
    let urls = extractor::extract_image_urls(doc)?;
    UrlValidator::new()?.validate_all(&urls)?;
    Ok(urls)
}

/// Builds the plan without touching the network or the destination.
pub fn prepare(
    opts: &RunOptions,
    cfg: &RoamdlConfig,
    dest_dir: &Path,
) -> Result<DownloadPlan, RunError> {
    let doc = SourceDocument::open(&opts.file)?;
    let urls = extract_and_validate(&doc)?;
    Ok(DownloadPlan {
        source_name: doc.display_name(),
        urls,
        naming: OutputNaming::new(&opts.base_name, &cfg.separator, &cfg.image_extension),
        dest_dir: dest_dir.to_path_buf(),
        assume_yes: opts.assume_yes,
    })
}

/// Runs the whole pipeline with the real HTTP client.
pub fn run<R: BufRead, W: Write>(
    opts: &RunOptions,
    cfg: &RoamdlConfig,
    console: &mut Console<R, W>,
    dest_dir: &Path,
) -> Result<Vec<DownloadOutcome>, RunError> {
    let mut fetcher = Fetcher::new(&cfg.user_agent).map_err(RunError::HttpClient)?;
    run_with(opts, cfg, &mut fetcher, console, dest_dir)
}

/// Runs the whole pipeline with a caller-supplied fetcher.
pub fn run_with<F: Fetch, R: BufRead, W: Write>(
    opts: &RunOptions,
    cfg: &RoamdlConfig,
    fetcher: &mut F,
    console: &mut Console<R, W>,
    dest_dir: &Path,
) -> Result<Vec<DownloadOutcome>, RunError> {
    let plan = prepare(opts, cfg, dest_dir)?;
    gate::confirm_download(&plan, console, cfg.attempts())?;
    downloader::download_all(&plan, fetcher, console, cfg.attempts())
}
