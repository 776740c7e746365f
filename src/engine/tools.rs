//! Path and filter utilities

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::utils::config::SVG_EXTENSION;

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// True if the extension is `svg` in any case.
pub fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SVG_EXTENSION))
}

/// Final component as text. Invalid UTF-8 bytes become U+FFFD; the rest is kept, so
/// ASCII tokens in a non-UTF-8 name still match.
pub fn file_name_lossy(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""))
}

/// Lowercased final component, empty when the path has none.
pub fn lower_file_name(path: &Path) -> String {
    file_name_lossy(path).to_lowercase()
}

/// File name with one trailing `.svg` removed (case-insensitive). Other extensions are kept.
pub fn svg_stem(path: &Path) -> String {
    let name = file_name_lossy(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case(SVG_EXTENSION) => stem.to_string(),
        _ => name.into_owned(),
    }
}

/// Human-readable path for log lines: relative to `base` when possible.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path_relative_to(path, base)
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
