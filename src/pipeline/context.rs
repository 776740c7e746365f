//! Pipeline context and tuning: channels shared by the producer, workers, and collector.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use crate::{Job, Opts, Outcome};

/// Tuning derived from job count and available threads.
#[derive(Clone, Debug)]
pub struct PipelineTuning {
    pub num_workers: usize,
    /// Capacity for the job and outcome channels.
    pub channel_cap: usize,
}

/// Read-only settings every worker gets its own copy of.
#[derive(Clone, Debug)]
pub struct WorkerContext {
    pub output_dir: PathBuf,
    pub follow_links: bool,
}

impl WorkerContext {
    pub fn new(output_dir: &Path, opts: &Opts) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            follow_links: opts.follow_links,
        }
    }
}

/// Handles returned by [`run_pipeline`](super::run_pipeline): receive outcomes, then join
/// when the channel closes.
pub struct PipelineHandles {
    pub outcome_rx: Receiver<Outcome>,
    pub producer_handle: JoinHandle<usize>,
    pub worker_handles: Vec<JoinHandle<()>>,
}

/// Channels for the pipeline. Producer gets job_tx; workers get job_rx and outcome_tx;
/// the collector keeps outcome_rx.
pub struct PipelineChannels {
    pub job_tx: Sender<Job>,
    pub job_rx: Receiver<Job>,
    pub outcome_tx: Sender<Outcome>,
    pub outcome_rx: Receiver<Outcome>,
}

pub fn create_pipeline_channels(channel_cap: usize) -> PipelineChannels {
    let (job_tx, job_rx) = bounded::<Job>(channel_cap);
    let (outcome_tx, outcome_rx) = bounded::<Outcome>(channel_cap);
    PipelineChannels {
        job_tx,
        job_rx,
        outcome_tx,
        outcome_rx,
    }
}
