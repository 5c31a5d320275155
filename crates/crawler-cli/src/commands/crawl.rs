//! Crawl command implementation.

use crate::Cli;
use anyhow::{Context, Result};
use colored::Colorize;
use crawler_core::{Crawler, ExtensionFilter, ScanConfiguration};
use crawler_git::GitRepository;

/// Run the crawl command.
pub fn run(cli: Cli) -> Result<()> {
    let config =
        ScanConfiguration::new(cli.repo_url, cli.repo_path, cli.dir_path, cli.search_pattern)
            .with_extensions(ExtensionFilter::parse(&cli.supported_file_extensions))
            .with_output_path(cli.output_path)
            .with_verbose(cli.verbose)
            .with_branch(cli.branch);

    eprintln!(
        "{} Searching {} for {:?}",
        "→".blue(),
        config.scan_dir().display(),
        config.pattern
    );

    let repo = GitRepository::open(&config.repo_local_path)
        .map_err(crawler_core::Error::from)
        .with_context(|| {
            format!(
                "Failed to open repository at {}",
                config.repo_local_path.display()
            )
        })?;

    let summary = Crawler::new(repo).run(&config)?;

    eprintln!("{} Crawl complete!", "✓".green());
    eprintln!("  Files scanned: {}", summary.files_scanned);
    eprintln!("  Files matched: {}", summary.files_matched);
    eprintln!("  Records: {}", summary.records_written);
    eprintln!("  Output: {}", config.output_path.display());

    Ok(())
}
