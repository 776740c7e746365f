//! Recursive SVG listing for one technology directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::tools::has_svg_extension;

/// All regular files under `dir` with an `.svg` extension (any case), in walk order.
///
/// Order is whatever walkdir yields (pre-order, directory listing order, unsorted); the
/// selection heuristic uses it as its last tie-break. The first traversal error aborts the
/// scan: a missing or unreadable root, or any unreadable descendant, returns `Err` and no
/// partial list.
pub fn find_svg_files(dir: &Path, follow_links: bool) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut svg_files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(follow_links) {
        let entry = entry?;
        if entry.file_type().is_file() && has_svg_extension(entry.path()) {
            svg_files.push(entry.into_path());
        }
    }
    Ok(svg_files)
}
