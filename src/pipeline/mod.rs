//! Pipeline components: job enumeration, workers, dispatch, error reporting.

pub mod context;
pub mod enumerate;
pub mod error_handler;
pub mod job;
pub mod orchestrator;

pub use context::{
    PipelineChannels, PipelineHandles, PipelineTuning, WorkerContext, create_pipeline_channels,
};
pub use enumerate::{enumerate_jobs, spawn_producer_thread};
pub use error_handler::{log_skip_breakdown, log_skipped_outcome, skip_reasons};
pub use job::{process_job, spawn_job_workers};
pub use orchestrator::{
    dispatch_jobs, run_pipeline, setup_pipeline_tuning, shutdown_pipeline_handles,
};

