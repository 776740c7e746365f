//! Best-icon selection among the SVG variants of one technology.
//!
//! Icon sets ship several styles per technology (`-original`, `-plain`, `-line`, wordmarks).
//! The cascade below prefers, in order:
//!
//! 1. a file name containing `original`
//! 2. a file whose stem equals the technology name
//! 3. a file name containing `plain`
//! 4. the first candidate
//!
//! All comparisons are case-insensitive. Within a rule the earliest candidate wins.

use std::path::{Path, PathBuf};

use super::tools::{lower_file_name, svg_stem};

pub const ORIGINAL_TOKEN: &str = "original";
pub const PLAIN_TOKEN: &str = "plain";

/// Pick one path from `candidates` for `tech_name`. `None` only when `candidates` is empty.
pub fn select_best_svg<'a>(candidates: &'a [PathBuf], tech_name: &str) -> Option<&'a Path> {
    let contains = |token: &str| {
        candidates
            .iter()
            .find(|p| lower_file_name(p).contains(token))
    };

    contains(ORIGINAL_TOKEN)
        .or_else(|| {
            let tech_name = tech_name.to_lowercase();
            candidates
                .iter()
                .find(|p| svg_stem(p).to_lowercase() == tech_name)
        })
        .or_else(|| contains(PLAIN_TOKEN))
        .or_else(|| candidates.first())
        .map(PathBuf::as_path)
}

