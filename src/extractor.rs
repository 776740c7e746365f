//! Extraction run: ordered steps from checkout to cleanup.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

use crate::checkout::{clone_repository, prune_clone};
use crate::pipeline::{dispatch_jobs, enumerate_jobs};
use crate::utils::workdirs::{prepare_output_dir, remove_dir_if_exists};
use crate::{DispatchReport, Opts};

/// Steps of a full run, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    CloneRepository,
    PruneClone,
    CreateOutputDirectory,
    ExtractSvgIcons,
    Cleanup,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::CloneRepository => "Clone repository",
            Step::PruneClone => "Cleanup clone",
            Step::CreateOutputDirectory => "Create output directory",
            Step::ExtractSvgIcons => "Extract SVG icons",
            Step::Cleanup => "Cleanup temporary files",
        }
    }

    /// A failing best-effort step is logged and the run goes on.
    pub fn is_best_effort(&self) -> bool {
        matches!(self, Step::Cleanup)
    }
}

/// Steps that apply to `opts`. Local source mode never touches the source tree.
pub fn planned_steps(opts: &Opts) -> Vec<Step> {
    let mut steps = Vec::with_capacity(5);
    if opts.uses_clone() {
        steps.push(Step::CloneRepository);
        steps.push(Step::PruneClone);
    }
    steps.push(Step::CreateOutputDirectory);
    steps.push(Step::ExtractSvgIcons);
    if opts.uses_clone() && !opts.keep_clone {
        steps.push(Step::Cleanup);
    }
    steps
}

/// Drives one run. Holds the extraction report once that step has run.
pub struct IconExtractor<'a> {
    opts: &'a Opts,
    report: Option<DispatchReport>,
}

impl<'a> IconExtractor<'a> {
    pub fn new(opts: &'a Opts) -> Self {
        Self { opts, report: None }
    }

    /// Run every planned step. The first failing required step aborts the run.
    pub fn run(mut self) -> Result<DispatchReport> {
        for step in planned_steps(self.opts) {
            if let Err(e) = self.run_step(step) {
                if step.is_best_effort() {
                    warn!("{} failed: {:#}", step.name(), e);
                    continue;
                }
                return Err(e).with_context(|| format!("{} failed", step.name()));
            }
        }
        Ok(self.report.unwrap_or_default())
    }

    fn run_step(&mut self, step: Step) -> Result<()> {
        let opts = self.opts;
        match step {
            Step::CloneRepository => clone_repository(&opts.repo_url, &opts.clone_dir),
            Step::PruneClone => prune_clone(&opts.clone_dir, &opts.icons_subdir).map(|_| ()),
            Step::CreateOutputDirectory => prepare_output_dir(&opts.output_dir),
            Step::ExtractSvgIcons => {
                let report = extract_svg_icons(&opts.icons_root(), &opts.output_dir, opts)?;
                self.report = Some(report);
                Ok(())
            }
            Step::Cleanup => {
                info!("Cleaning up temporary files...");
                remove_dir_if_exists(&opts.clone_dir).with_context(|| {
                    format!("remove clone directory {}", opts.clone_dir.display())
                })
            }
        }
    }
}

/// Enumerate technology directories under `icons_root` and dispatch them.
/// `output_dir` must already exist.
pub fn extract_svg_icons(
    icons_root: &Path,
    output_dir: &Path,
    opts: &Opts,
) -> Result<DispatchReport> {
    info!("Extracting SVG icons...");
    let jobs = enumerate_jobs(icons_root)?;
    let report = dispatch_jobs(jobs, output_dir, opts)?;
    info!(
        "Extraction completed. Processed: {}, Skipped: {}",
        report.tally.processed, report.tally.skipped
    );
    Ok(report)
}
