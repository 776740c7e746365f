use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::utils::config::{Defaults, PackagePaths};

/// Sibling temp path for an output file while it is being written.
pub fn temp_path_for(dst: &Path) -> PathBuf {
    let name = dst
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dst.parent()
        .unwrap_or(Path::new("."))
        .join(format!("{name}{}", PackagePaths::get().temp_suffix()))
}

/// Copy `src` to `dst` byte for byte, overwriting `dst`.
/// Writes to a temp sibling then renames, so `dst` is either the old file or the full copy.
/// The temp file is removed when the copy fails.
pub fn copy_file_atomic(src: &Path, dst: &Path) -> io::Result<u64> {
    let temp_path = temp_path_for(dst);
    let copied = fs::copy(src, &temp_path).and_then(|n| {
        fs::rename(&temp_path, dst)?;
        Ok(n)
    });
    if copied.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    copied
}

/// Remove `dir` and everything under it. Missing is fine.
pub fn remove_dir_if_exists(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Remove any previous output directory and create it empty.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    remove_dir_if_exists(dir)
        .with_context(|| format!("remove existing output directory {}", dir.display()))?;
    create_dir(dir).with_context(|| format!("create output directory {}", dir.display()))?;
    log::info!("Output directory created: {}", dir.display());
    Ok(())
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(Defaults::DIR_PERMISSIONS)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}
