//! svgpick CLI: clone an icon repository and extract one SVG per technology.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use svgpick::engine::arg_parser::Cli;
use svgpick::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
