use anyhow::Result;
use log::{debug, info};
use std::path::Path;
use std::thread::JoinHandle;

use crate::engine::progress::{finish_progress_bar, job_progress_bar, update_progress_bar};
use crate::utils::config::WorkerThreadLimits;
use crate::{DispatchReport, Job, Opts, Tally, pipeline};

/// Worker count and channel capacity for `job_count` jobs.
pub fn setup_pipeline_tuning(job_count: usize, opts: &Opts) -> pipeline::PipelineTuning {
    let num_workers = WorkerThreadLimits::current().worker_count(job_count, opts.num_threads);
    pipeline::PipelineTuning {
        num_workers,
        channel_cap: job_count.max(1),
    }
}

/// Start producer and workers. Returns the outcome receiver and handles; caller receives
/// from `outcome_rx` and must join the handles when it closes.
pub fn run_pipeline(
    jobs: Vec<Job>,
    output_dir: &Path,
    opts: &Opts,
    tuning: &pipeline::PipelineTuning,
) -> pipeline::PipelineHandles {
    let channels = pipeline::create_pipeline_channels(tuning.channel_cap);
    let ctx = pipeline::WorkerContext::new(output_dir, opts);

    let producer_handle = pipeline::spawn_producer_thread(jobs, channels.job_tx);
    let worker_handles = pipeline::spawn_job_workers(
        channels.job_rx,
        &channels.outcome_tx,
        &ctx,
        tuning.num_workers,
    );

    // Dropping the last sender closes the channel once every worker exits.
    drop(channels.outcome_tx);

    pipeline::PipelineHandles {
        outcome_rx: channels.outcome_rx,
        producer_handle,
        worker_handles,
    }
}

/// Join producer and workers (after the outcome stream is drained). Returns jobs sent.
pub fn shutdown_pipeline_handles(
    producer_handle: JoinHandle<usize>,
    worker_handles: Vec<JoinHandle<()>>,
) -> Result<usize> {
    let sent = producer_handle
        .join()
        .map_err(|_| anyhow::anyhow!("producer thread panicked"))?;
    let mut panicked = 0_usize;
    for h in worker_handles {
        if h.join().is_err() {
            panicked += 1;
        }
    }
    if panicked > 0 {
        anyhow::bail!("{} worker thread(s) panicked", panicked);
    }
    Ok(sent)
}

/// Main dispatcher: run every job on a bounded worker pool and tally the outcomes.
/// Per-job failures are logged and counted as skipped; only a broken pipeline is an error.
/// Jobs → job channel → workers (scan, select, copy) → outcome channel → tally.
pub fn dispatch_jobs(jobs: Vec<Job>, output_dir: &Path, opts: &Opts) -> Result<DispatchReport> {
    let job_count = jobs.len();
    if job_count == 0 {
        info!("No technology directories to process");
        return Ok(DispatchReport::default());
    }

    let tuning = setup_pipeline_tuning(job_count, opts);
    info!(
        "Processing {} directories using {} workers...",
        job_count, tuning.num_workers
    );

    let pipeline::PipelineHandles {
        outcome_rx,
        producer_handle,
        worker_handles,
    } = run_pipeline(jobs, output_dir, opts, &tuning);

    let bar = job_progress_bar(opts.verbose, job_count);
    let mut tally = Tally::default();
    let mut outcomes = Vec::with_capacity(job_count);
    while let Ok(outcome) = outcome_rx.recv() {
        tally.record(&outcome);
        pipeline::log_skipped_outcome(&outcome);
        if let Some(bar) = &bar {
            update_progress_bar(bar, 1);
        }
        outcomes.push(outcome);
    }
    if let Some(bar) = &bar {
        finish_progress_bar(bar);
    }
    debug!("main: outcome channel closed, {} outcomes", outcomes.len());

    let sent = shutdown_pipeline_handles(producer_handle, worker_handles)?;
    if sent != job_count || tally.total() != job_count {
        anyhow::bail!(
            "pipeline lost jobs: {} submitted, {} sent, {} outcomes",
            job_count,
            sent,
            tally.total()
        );
    }

    let report = DispatchReport { tally, outcomes };
    pipeline::log_skip_breakdown(&report);
    Ok(report)
}
