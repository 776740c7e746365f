//! svgpick: extract one representative SVG icon per technology from an icon repository.

pub mod checkout;
pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::path::Path;

/// Result alias used by public svgpick API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Full run: clone (unless `opts.source` is set), prune, recreate the output directory,
/// extract, clean up. Returns the extraction report; skipped technologies are not errors.
pub fn run(opts: &Opts) -> Result<DispatchReport> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    extractor::IconExtractor::new(opts).run()
}

/// Extract from an existing icon tree into an existing `output_dir`. No clone, no cleanup,
/// and the output directory is not emptied first.
///
/// ```ignore
/// let opts = svgpick::Opts::default();
/// let report = svgpick::extract_from_dir(Path::new("devicon/icons"), Path::new("svg"), &opts)?;
/// println!("{} extracted, {} skipped", report.tally.processed, report.tally.skipped);
/// ```
pub fn extract_from_dir(
    icons_root: &Path,
    output_dir: &Path,
    opts: &Opts,
) -> Result<DispatchReport> {
    extractor::extract_svg_icons(icons_root, output_dir, opts)
}
