//! Directory walk and crawl orchestration.
//!
//! A run walks the scan directory, filters candidate files by suffix, scans
//! each one for the pattern and blames only the matched lines. Records are
//! streamed to the output file one source file at a time.

use crate::blame::{BlameProvider, BlameResolver};
use crate::config::ScanConfiguration;
use crate::error::{Error, Result};
use crate::matcher::find_matches;
use crate::record::{BlameRecord, MatchRecord};
use crate::url::build_line_url;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Regular files seen under the scan directory.
    pub files_visited: usize,
    /// Files that passed the extension filter and were scanned.
    pub files_scanned: usize,
    /// Files with at least one match.
    pub files_matched: usize,
    /// Records written to the output file.
    pub records_written: usize,
}

/// Crawls a directory of a repository and attributes matched lines.
pub struct Crawler<P> {
    provider: P,
}

impl<P: BlameProvider> Crawler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run one crawl and write the results to `config.output_path`.
    ///
    /// Stops at the first error. Records already flushed for earlier files
    /// stay in the output file.
    pub fn run(&self, config: &ScanConfiguration) -> Result<CrawlSummary> {
        let scan_dir = resolve_scan_dir(config)?;
        let branch = match &config.branch_override {
            Some(branch) => branch.clone(),
            None => self.provider.current_branch_name()?,
        };

        tracing::info!(
            "Crawling {} for {:?} on branch {}",
            scan_dir.display(),
            config.pattern,
            branch
        );

        let output = File::create(&config.output_path).map_err(|e| output_error(config, e))?;
        let mut output = BufWriter::new(output);
        let output_path = config.output_path.canonicalize().ok();
        let resolver = BlameResolver::new(&self.provider);
        let mut summary = CrawlSummary::default();

        let walker = WalkDir::new(&scan_dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_git_dir(e));

        for entry in walker {
            let entry = entry?;

            // Symlinks are not followed, so they never count as regular files.
            if !entry.file_type().is_file() {
                continue;
            }

            let file_path = entry.path();
            if output_path.as_deref() == Some(file_path) {
                tracing::debug!("Skipping output file {}", file_path.display());
                continue;
            }
            summary.files_visited += 1;

            if !config.allowed_extensions.allows(file_path) {
                tracing::debug!("Skipping {}", file_path.display());
                continue;
            }

            tracing::debug!("Processing file {}", file_path.display());
            summary.files_scanned += 1;

            let matches = find_matches(&read_text(file_path)?, &config.pattern);
            if matches.is_empty() {
                continue;
            }
            summary.files_matched += 1;

            let relative_path = self.relative_to_root(file_path)?;
            let records =
                self.blame_matches(&resolver, config, &branch, &relative_path, &matches)?;

            for record in &records {
                writeln!(output, "{}", record.render(config.verbose))
                    .map_err(|e| output_error(config, e))?;
            }
            output.flush().map_err(|e| output_error(config, e))?;
            summary.records_written += records.len();
        }

        tracing::info!(
            "Scanned {} files, {} with matches, {} records written",
            summary.files_scanned,
            summary.files_matched,
            summary.records_written
        );

        Ok(summary)
    }

    fn blame_matches(
        &self,
        resolver: &BlameResolver<'_, P>,
        config: &ScanConfiguration,
        branch: &str,
        relative_path: &Path,
        matches: &[MatchRecord],
    ) -> Result<Vec<BlameRecord>> {
        let mut records = Vec::with_capacity(matches.len());

        for m in matches {
            let attribution = resolver.resolve(relative_path, m.line_number)?;
            let url = build_line_url(&config.repo_remote_url, branch, relative_path, m.line_number);
            let record = BlameRecord::new(attribution, url);

            tracing::info!("\t{}", record.render(config.verbose));
            records.push(record);
        }

        Ok(records)
    }

    fn relative_to_root(&self, path: &Path) -> Result<PathBuf> {
        path.strip_prefix(self.provider.root())
            .map(Path::to_path_buf)
            .map_err(|_| {
                Error::Config(format!(
                    "{} is outside the repository at {}",
                    path.display(),
                    self.provider.root().display()
                ))
            })
    }
}

fn resolve_scan_dir(config: &ScanConfiguration) -> Result<PathBuf> {
    let scan_dir = config.scan_dir();
    let scan_dir = scan_dir.canonicalize().map_err(|e| {
        Error::Config(format!("Cannot access {}: {}", scan_dir.display(), e))
    })?;

    if !scan_dir.is_dir() {
        return Err(Error::Config(format!(
            "{} is not a directory",
            scan_dir.display()
        )));
    }

    Ok(scan_dir)
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| Error::Decode {
        path: path.to_path_buf(),
    })
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == ".git"
}

fn output_error(config: &ScanConfiguration, source: std::io::Error) -> Error {
    Error::Output {
        path: config.output_path.clone(),
        source,
    }
}
