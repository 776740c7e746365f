//! Job enumeration: one job per technology directory, fed to workers from a producer thread.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use std::path::Path;
use std::thread::{self, JoinHandle};

use crate::Job;

/// One [`Job`] per immediate subdirectory of `icons_root`, in listing order.
/// Plain files at the root are ignored. Failing to read the root is fatal to the run.
pub fn enumerate_jobs(icons_root: &Path) -> Result<Vec<Job>> {
    let entries = std::fs::read_dir(icons_root)
        .with_context(|| format!("read icons directory {}", icons_root.display()))?;
    let mut jobs = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("read icons directory {}", icons_root.display()))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        let tech_name = entry.file_name().to_string_lossy().into_owned();
        jobs.push(Job::new(tech_name, entry.path()));
    }
    Ok(jobs)
}

/// Send every job on `job_tx`, then drop it so workers see the queue close.
/// Returns the number of jobs sent.
pub fn spawn_producer_thread(jobs: Vec<Job>, job_tx: Sender<Job>) -> JoinHandle<usize> {
    thread::spawn(move || {
        let mut count = 0_usize;
        for job in jobs {
            if job_tx.send(job).is_err() {
                break;
            }
            count += 1;
        }
        drop(job_tx);
        count
    })
}
