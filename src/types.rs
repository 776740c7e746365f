//! Public and internal types for the svgpick API and pipeline.

use std::path::{Path, PathBuf};

use crate::utils::config::Defaults;

/// One technology directory to reduce to a single output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    /// Directory name; also the output file stem.
    pub tech_name: String,
    pub tech_path: PathBuf,
}

impl Job {
    pub fn new(tech_name: impl Into<String>, tech_path: impl Into<PathBuf>) -> Self {
        Self {
            tech_name: tech_name.into(),
            tech_path: tech_path.into(),
        }
    }

    /// Output file name for this job: `<tech_name>.svg`.
    pub fn output_file_name(&self) -> String {
        format!("{}.svg", self.tech_name)
    }
}

/// Why a single job produced no output file. Never fatal to the batch.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("failed to find SVG files: {0}")]
    ScanFailed(#[from] walkdir::Error),

    #[error("no SVG files found")]
    NoFilesFound,

    #[error("no suitable SVG file found")]
    NoSuitableFile,

    #[error("failed to copy file: {0}")]
    CopyFailed(#[from] std::io::Error),
}

impl JobError {
    /// Short stable name of the failure kind, for grouping in summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            JobError::ScanFailed(_) => "ScanFailed",
            JobError::NoFilesFound => "NoFilesFound",
            JobError::NoSuitableFile => "NoSuitableFile",
            JobError::CopyFailed(_) => "CopyFailed",
        }
    }
}

/// Result of processing one [`Job`]. `Ok` holds the selected source file.
#[derive(Debug)]
pub struct Outcome {
    pub tech_name: String,
    pub result: Result<PathBuf, JobError>,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&JobError> {
        self.result.as_ref().err()
    }

    pub fn selected(&self) -> Option<&Path> {
        self.result.as_deref().ok()
    }
}

/// Aggregate counts. `processed + skipped` equals the number of outcomes recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub processed: usize,
    pub skipped: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.success() {
            self.processed += 1;
        } else {
            self.skipped += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.processed + self.skipped
    }
}

/// Everything the dispatcher hands back: counts plus one outcome per job, in completion order.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub tally: Tally,
    pub outcomes: Vec<Outcome>,
}

impl DispatchReport {
    /// Outcomes that produced no output file.
    pub fn skipped(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.success())
    }
}

/// Full options (CLI and lib).
#[derive(Clone, Debug)]
pub struct Opts {
    /// Git URL of the icon repository.
    pub repo_url: String,
    /// Where the repository is cloned. Removed before clone and, unless `keep_clone`, after extraction.
    pub clone_dir: PathBuf,
    /// Subdirectory of the clone holding one directory per technology.
    pub icons_subdir: String,
    /// Flat output directory. Recreated on every run.
    pub output_dir: PathBuf,
    /// Existing icon tree to extract from. When set, nothing is cloned, pruned, or cleaned up.
    pub source: Option<PathBuf>,
    /// Leave the clone on disk after extraction.
    pub keep_clone: bool,
    /// Override the available-thread figure used for the worker count (still capped).
    pub num_threads: Option<usize>,
    /// Follow symbolic links while scanning technology directories.
    pub follow_links: bool,
    /// Debug logging and progress bar.
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            repo_url: Defaults::REPO_URL.to_string(),
            clone_dir: PathBuf::from(Defaults::CLONE_DIR),
            icons_subdir: Defaults::ICONS_SUBDIR.to_string(),
            output_dir: PathBuf::from(Defaults::OUTPUT_DIR),
            source: None,
            keep_clone: false,
            num_threads: None,
            follow_links: false,
            verbose: false,
        }
    }
}

impl Opts {
    /// Root holding the technology directories: `source` if set, else `<clone_dir>/<icons_subdir>`.
    pub fn icons_root(&self) -> PathBuf {
        match &self.source {
            Some(src) => src.clone(),
            None => self.clone_dir.join(&self.icons_subdir),
        }
    }

    pub fn uses_clone(&self) -> bool {
        self.source.is_none()
    }
}
