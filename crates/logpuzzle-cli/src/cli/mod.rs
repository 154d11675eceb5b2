//! CLI for the logpuzzle image extractor.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use logpuzzle_core::config;
use std::path::PathBuf;

use commands::{run_download, run_print};

/// Extract puzzle image URLs from an Apache access log.
///
/// Without `--todir` the ordered URLs are printed one per line.
#[derive(Debug, Parser)]
#[command(name = "logpuzzle")]
#[command(override_usage = "logpuzzle [-d|--todir DESTDIR] LOGFILE")]
#[command(about = "Extract and download puzzle images from an Apache access log", long_about = None)]
pub struct Cli {
    /// Destination directory for downloaded images; index.html is written to the current directory.
    #[arg(short = 'd', long = "todir", value_name = "DESTDIR")]
    pub todir: Option<PathBuf>,

    /// Apache logfile to extract urls from (named `<prefix>_<host>[_...]`).
    #[arg(value_name = "LOGFILE")]
    pub logfile: PathBuf,
}

impl Cli {
    /// Rendered usage line, as printed when no arguments are given.
    pub fn usage() -> String {
        format!("{}\n", Cli::command().render_usage())
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.run()
    }

    pub fn run(self) -> Result<()> {
        match self.todir {
            Some(dest_dir) => {
                let cfg = config::load()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_download(&self.logfile, &dest_dir, &cfg)
            }
            None => run_print(&self.logfile, &mut std::io::stdout().lock()),
        }
    }
}
