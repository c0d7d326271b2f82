//! CLI for the roamdl image downloader.

use anyhow::Result;
use clap::Parser;
use roamdl_core::config;
use roamdl_core::console::Console;
use roamdl_core::pipeline::{self, RunOptions};
use std::path::PathBuf;

/// Download the images embedded in an exported Roam Research markdown page.
#[derive(Debug, Parser)]
#[command(name = "roamdl")]
#[command(
    about = "Download images embedded in an exported Roam markdown page",
    long_about = None
)]
pub struct Cli {
    /// Exported markdown (.md) page to scan for image embeds.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Prefix for output files; `pic` gives pic-1.png, pic-2.png, ...
    #[arg(short = 'b', long = "base-name", value_name = "NAME", default_value = "")]
    pub base_name: String,

    /// Answer yes to every prompt (download confirmation and overwrites).
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Print the image URLs found in the page and exit without downloading.
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    pub fn options(&self) -> RunOptions {
        RunOptions {
            file: self.file.clone(),
            base_name: self.base_name.clone(),
            assume_yes: self.yes,
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let opts = cli.options();

        if cli.list {
            for url in pipeline::list_urls(&opts)? {
                println!("{}", url);
            }
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let dest_dir = std::env::current_dir()?;
        let mut console = Console::stdio();
        let outcomes = pipeline::run(&opts, &cfg, &mut console, &dest_dir)?;
        tracing::info!(
            file = %opts.file.display(),
            saved = outcomes.iter().filter(|o| o.is_saved()).count(),
            total = outcomes.len(),
            "run finished"
        );
        Ok(())
    }
}
