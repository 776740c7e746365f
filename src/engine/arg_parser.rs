use clap::Parser;
use std::path::PathBuf;

/// Extract one representative SVG per technology from a devicon-style icon repository.
#[derive(Clone, Debug, Parser)]
#[command(name = "svgpick")]
#[command(about = "Clone an icon repository and copy one SVG per technology into a flat directory.")]
pub struct Cli {
    /// Git URL of the icon repository. Default: the devicon repository.
    #[arg(long, value_name = "URL")]
    pub repo: Option<String>,

    /// Directory to clone into. Removed before cloning and after extraction.
    #[arg(long, value_name = "DIR")]
    pub clone_dir: Option<PathBuf>,

    /// Subdirectory of the clone holding one directory per technology.
    #[arg(long, value_name = "NAME")]
    pub icons_subdir: Option<String>,

    /// Output directory for `<technology>.svg` files. Recreated on every run.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Use an existing icon tree instead of cloning. Nothing under it is modified.
    #[arg(long, short = 's', value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Keep the clone directory after extraction.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub keep_clone: Option<bool>,

    /// Follow symbolic links inside technology directories.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Worker threads (capped at 8 and at the number of technologies).
    #[arg(long, short = 'j', value_parser = clap::value_parser!(usize))]
    pub threads: Option<usize>,

    /// Verbose output: debug logging and a progress bar.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}
