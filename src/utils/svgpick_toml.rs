//! Load `.svgpick.toml` from a directory (CLI only). Lib callers build [`Opts`] directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct SvgpickToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    repo: Option<String>,
    clone_dir: Option<String>,
    icons_subdir: Option<String>,
    output: Option<String>,
    source: Option<String>,
    keep_clone: Option<bool>,
    threads: Option<usize>,
    follow_links: Option<bool>,
    verbose: Option<bool>,
}

/// Load the settings file from `dir`. `Ok(None)` when there is no file; a file that exists
/// but cannot be read or parsed is an error.
pub fn load_svgpick_toml(dir: &Path) -> Result<Option<SvgpickToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };
    let file = parse_svgpick_toml(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(file))
}

pub fn parse_svgpick_toml(s: &str) -> std::result::Result<SvgpickToml, toml::de::Error> {
    toml::from_str(s)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field.clone() {
            $opts.$opts_field = v.into();
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
pub fn apply_file_to_opts(file: &SvgpickToml, opts: &mut Opts) {
    let sec = &file.settings;
    apply_file_opt!(sec, opts, repo => repo_url);
    apply_file_opt!(sec, opts, clone_dir => clone_dir);
    apply_file_opt!(sec, opts, icons_subdir => icons_subdir);
    apply_file_opt!(sec, opts, output => output_dir);
    if let Some(ref p) = sec.source {
        opts.source = Some(PathBuf::from(p));
    }
    apply_file_opt!(sec, opts, keep_clone => keep_clone);
    if let Some(n) = sec.threads {
        opts.num_threads = Some(n);
    }
    apply_file_opt!(sec, opts, follow_links => follow_links);
    apply_file_opt!(sec, opts, verbose => verbose);
}
