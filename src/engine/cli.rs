//! CLI command handler: settings file, then flags, then one extraction run.

use anyhow::Result;
use log::{error, info};
use std::path::Path;

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::utils::setup_logging;
use crate::utils::svgpick_toml::{apply_file_to_opts, load_svgpick_toml};

/// Overwrite opts field from CLI when the flag was given.
macro_rules! apply_cli_opt {
    ($cli:expr, $opts:expr, $cli_field:ident => $opts_field:ident) => {
        if let Some(v) = $cli.$cli_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

/// Build Opts: defaults, then `.svgpick.toml` in `config_dir`, then CLI flags.
/// A settings file that exists but does not parse is an error, not silently ignored.
pub fn setup_opts(cli: &Cli, config_dir: &Path) -> Result<Opts> {
    let mut opts = Opts::default();
    if let Some(file) = load_svgpick_toml(config_dir)? {
        apply_file_to_opts(&file, &mut opts);
    }
    apply_cli_opt!(cli, opts, repo => repo_url);
    apply_cli_opt!(cli, opts, clone_dir => clone_dir);
    apply_cli_opt!(cli, opts, icons_subdir => icons_subdir);
    apply_cli_opt!(cli, opts, output => output_dir);
    if cli.source.is_some() {
        opts.source = cli.source.clone();
    }
    apply_cli_opt!(cli, opts, keep_clone => keep_clone);
    apply_cli_opt!(cli, opts, follow_links => follow_links);
    if cli.threads.is_some() {
        opts.num_threads = cli.threads;
    }
    apply_cli_opt!(cli, opts, verbose => verbose);
    Ok(opts)
}

/// Run one extraction. Skipped technologies do not make this fail.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = match setup_opts(cli, Path::new(".")) {
        Ok(opts) => opts,
        Err(e) => {
            setup_logging(cli.verbose.unwrap_or(false));
            error!("{:#}", e);
            return Err(e);
        }
    };
    setup_logging(opts.verbose);

    info!("Starting SVG extraction...");
    crate::run(&opts)?;
    info!(
        "Process completed successfully! Icons extracted to: {}",
        opts.output_dir.display()
    );
    Ok(())
}
