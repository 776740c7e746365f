//! Icon repository checkout: fresh `git clone`, then prune everything but the icons tree.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;
use std::process::Command;

use crate::utils::workdirs::remove_dir_if_exists;

/// Clone `repo_url` into `clone_dir`, replacing whatever was there.
pub fn clone_repository(repo_url: &str, clone_dir: &Path) -> Result<()> {
    info!("Cloning {}...", repo_url);
    remove_dir_if_exists(clone_dir)
        .with_context(|| format!("remove existing clone directory {}", clone_dir.display()))?;

    let output = Command::new("git")
        .arg("clone")
        .arg(repo_url)
        .arg(clone_dir)
        .output()
        .context("run git clone")?;
    if !output.status.success() {
        anyhow::bail!(
            "git clone exited with {}\nOutput: {}{}",
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    info!("Repository cloned successfully");
    Ok(())
}

/// Delete every top-level entry of `clone_dir` except `icons_subdir`.
/// The icons subdirectory must exist. Failing to remove an entry is only a warning.
/// Returns the number of entries removed.
pub fn prune_clone(clone_dir: &Path, icons_subdir: &str) -> Result<usize> {
    info!("Cleaning up cloned repository...");
    let icons_path = clone_dir.join(icons_subdir);
    if !icons_path.is_dir() {
        anyhow::bail!(
            "icons directory not found in cloned repository: {}",
            icons_path.display()
        );
    }

    let entries = std::fs::read_dir(clone_dir)
        .with_context(|| format!("read clone directory {}", clone_dir.display()))?;
    let mut removed = 0_usize;
    for entry in entries.flatten() {
        if entry.file_name() == icons_subdir {
            continue;
        }
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let res = if is_dir {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };
        match res {
            Ok(()) => removed += 1,
            Err(e) => warn!("failed to remove {}: {}", path.display(), e),
        }
    }

    info!("Cleanup completed");
    Ok(removed)
}
