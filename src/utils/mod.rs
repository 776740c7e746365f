pub mod config;
pub mod logger;
pub mod svgpick_toml;
pub mod workdirs;

pub use config::*;
pub use logger::setup_logging;
pub use workdirs::{copy_file_atomic, prepare_output_dir, remove_dir_if_exists, temp_path_for};
