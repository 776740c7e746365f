//! Engine module: scanning, selection, CLI, progress

pub mod arg_parser;
pub mod cli;
pub mod progress;
pub mod scanner;
pub mod selection;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{handle_run, setup_opts};
pub use scanner::find_svg_files;
pub use selection::select_best_svg;
pub use tools::{display_relative, has_svg_extension, path_relative_to, svg_stem};
