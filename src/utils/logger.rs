//! Terminal logging for svgpick runs.
//!
//! Every line is tagged `[svgpick]`. Skips and failures also carry their source module so a
//! warning about a technology can be traced to the stage (scan, select, copy) that raised it.

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Level for our own modules: Debug when verbose (per-icon "Extracted" lines), else Info.
pub fn crate_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Render one log line. Color codes are dropped by `colored` when stderr is not a terminal.
pub fn format_line(level: Level, target: &str, msg: &str) -> String {
    let tag = env!("CARGO_PKG_NAME").cyan();
    match level {
        Level::Error => format!("[{} {} {}] {}", tag, "ERROR".red().bold(), target.white(), msg),
        Level::Warn => format!("[{} {} {}] {}", tag, "WARN".yellow(), target.white(), msg),
        Level::Debug | Level::Trace => format!("[{}] {}", tag, msg.dimmed()),
        Level::Info => format!("[{}] {}", tag, msg),
    }
}

/// Install the global logger. Dependencies (walkdir, kdam) stay at Warn; `RUST_LOG` can
/// still override per module.
pub fn setup_logging(verbose: bool) {
    // try_init: the library entry points may be driven more than once in one process (tests).
    let _ = Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), crate_level(verbose))
        .format(|buf, record| {
            let msg = record.args().to_string();
            writeln!(buf, "{}", format_line(record.level(), record.target(), &msg))
        })
        .try_init();
}
