//! Crawler CLI
//!
//! Finds the authors of lines containing a search pattern in a git repository.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "crawler")]
#[command(author, version, long_about = None)]
#[command(about = "Tool for finding authors of the code changes")]
pub struct Cli {
    /// Git repo URL used as the base for generated links
    #[arg(short = 'u', long)]
    pub repo_url: String,

    /// Path to the local git repo to search
    #[arg(short = 'r', long)]
    pub repo_path: PathBuf,

    /// Directory in the repo to search (relative path)
    #[arg(short, long)]
    pub dir_path: PathBuf,

    /// Search pattern (literal substring, regex is not supported)
    #[arg(short, long)]
    pub search_pattern: String,

    /// Comma-separated file extensions to search, like '.h,.cpp' (empty = all files)
    #[arg(short = 'e', long, default_value = "")]
    pub supported_file_extensions: String,

    /// Output file
    #[arg(short, long, default_value = crawler_core::config::DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// Include the revision hash in every output line
    #[arg(short, long)]
    pub verbose: bool,

    /// Branch name used in links instead of the checked-out branch
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Trace every visited file
    #[arg(long)]
    pub debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence
    let default_filter = if cli.debug { "crawler=debug" } else { "crawler=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::crawl::run(cli)
}
