//! Application configuration constants.
//! Defaults and worker limits in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
    temp_suffix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
                temp_suffix: format!(".{pkg}.tmp"),
            }
        })
    }

    /// Optional settings file looked up in the working directory.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// Suffix appended to an output file while its copy is in flight.
    pub fn temp_suffix(&self) -> &str {
        &self.temp_suffix
    }
}

// ---- Defaults ----

/// Defaults for the devicon layout.
pub struct Defaults;

impl Defaults {
    pub const REPO_URL: &'static str = "https://github.com/devicons/devicon.git";
    pub const CLONE_DIR: &'static str = "devicon";
    pub const ICONS_SUBDIR: &'static str = "icons";
    pub const OUTPUT_DIR: &'static str = "svg";
    /// Mode for the created output directory (unix only).
    pub const DIR_PERMISSIONS: u32 = 0o755;
}

/// Extension (without dot) of candidate files, compared case-insensitively.
pub const SVG_EXTENSION: &str = "svg";

// ---- Worker threads ----

/// Worker pool limits for the dispatcher.
/// Use [`WorkerThreadLimits::current()`] to fill `all_threads` from rayon; the cap is const.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
    /// Upper bound on concurrent jobs. Every job hits the same filesystem.
    pub max: usize,
}

impl Default for WorkerThreadLimits {
    fn default() -> Self {
        Self {
            all_threads: 0, // use current() to set from rayon
            max: Self::MAX_THREADS,
        }
    }
}

impl WorkerThreadLimits {
    pub const MAX_THREADS: usize = 8;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
            ..Self::default()
        }
    }

    /// Worker count for `job_count` jobs: `min(available, cap, job_count)`.
    /// `thread_override` replaces the available figure. Zero only when there are no jobs.
    pub fn worker_count(&self, job_count: usize, thread_override: Option<usize>) -> usize {
        if job_count == 0 {
            return 0;
        }
        thread_override
            .unwrap_or(self.all_threads)
            .min(self.max)
            .min(job_count)
            .max(1)
    }
}
