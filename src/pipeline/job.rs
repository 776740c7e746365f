//! Directory job: scan one technology directory, pick an icon, copy it out.

use crossbeam_channel::{Receiver, Sender};
use log::debug;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crate::engine::scanner::find_svg_files;
use crate::engine::selection::select_best_svg;
use crate::engine::tools::display_relative;
use crate::utils::workdirs::copy_file_atomic;
use crate::{Job, JobError, Outcome};

use super::context::WorkerContext;

/// Turn one technology directory into zero or one output file.
/// Writes `<output_dir>/<tech_name>.svg` on success; on failure nothing is left at that path
/// by this call.
pub fn process_job(job: &Job, ctx: &WorkerContext) -> Outcome {
    Outcome {
        tech_name: job.tech_name.clone(),
        result: extract_one(job, ctx),
    }
}

fn extract_one(job: &Job, ctx: &WorkerContext) -> Result<PathBuf, JobError> {
    let svg_files = find_svg_files(&job.tech_path, ctx.follow_links)?;
    if svg_files.is_empty() {
        return Err(JobError::NoFilesFound);
    }
    let selected = select_best_svg(&svg_files, &job.tech_name).ok_or(JobError::NoSuitableFile)?;

    let output_name = job.output_file_name();
    copy_file_atomic(selected, &ctx.output_dir.join(&output_name))?;
    debug!(
        "Extracted: {}/{} -> {}",
        job.tech_name,
        display_relative(selected, &job.tech_path),
        output_name
    );
    Ok(selected.to_path_buf())
}

/// Single worker: take jobs from job_rx until it closes, send one outcome per job.
fn job_worker_loop(job_rx: Receiver<Job>, outcome_tx: Sender<Outcome>, ctx: WorkerContext) {
    while let Ok(job) = job_rx.recv() {
        if outcome_tx.send(process_job(&job, &ctx)).is_err() {
            break;
        }
    }
    drop(outcome_tx);
}

/// Spawn `num_workers` job workers sharing one queue. Caller must drop its own outcome sender
/// after this so the outcome channel closes when the last worker exits.
pub fn spawn_job_workers(
    job_rx: Receiver<Job>,
    outcome_tx: &Sender<Outcome>,
    ctx: &WorkerContext,
    num_workers: usize,
) -> Vec<JoinHandle<()>> {
    (0..num_workers)
        .map(|_| {
            let job_rx = job_rx.clone();
            let outcome_tx = outcome_tx.clone();
            let ctx = ctx.clone();
            thread::spawn(move || job_worker_loop(job_rx, outcome_tx, ctx))
        })
        .collect()
}
