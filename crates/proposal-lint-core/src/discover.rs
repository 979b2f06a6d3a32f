//! Proposal file discovery.
//!
//! Lists the Markdown proposals directly inside a proposals directory,
//! skipping files whose names match an exclude pattern.

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The process proposal is not itself a proposal and is excluded by default.
pub const DEFAULT_EXCLUDE: &str = "0001-simd-process.md";

/// Errors that can occur while listing proposals.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// An exclude pattern is not a valid glob.
    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: globset::Error,
    },

    /// The proposals directory does not exist or is not a directory.
    #[error("proposals directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),
}

/// Configuration for proposal discovery.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// File-name globs to skip.
    pub exclude: Vec<String>,
    /// File extension of proposals, without the dot.
    pub extension: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            exclude: vec![DEFAULT_EXCLUDE.to_string()],
            extension: "md".to_string(),
        }
    }
}

impl DiscoveryConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclude patterns.
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Sets the proposal file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    fn exclude_set(&self) -> Result<GlobSet, DiscoveryError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern).map_err(|source| DiscoveryError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|source| DiscoveryError::InvalidPattern {
                pattern: self.exclude.join(","),
                source,
            })
    }
}

/// Lists proposal files in a directory, sorted by path.
///
/// Only files directly inside `dir` are considered; hidden files and
/// subdirectories are skipped.
pub fn list_proposals(
    dir: &Path,
    config: &DiscoveryConfig,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !dir.is_dir() {
        return Err(DiscoveryError::MissingDirectory(dir.to_path_buf()));
    }
    let exclude = config.exclude_set()?;

    debug!(
        "Listing proposals in {:?} (extension={}, exclude={:?})",
        dir, config.extension, config.exclude
    );

    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .hidden(true)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(config.extension.as_str()) {
            continue;
        }

        if let Some(name) = path.file_name()
            && exclude.is_match(name)
        {
            trace!("Excluding {:?}", path);
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    debug!("Found {} proposals", files.len());
    trace!("Proposals: {:?}", files);
    Ok(files)
}
