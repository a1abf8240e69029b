//! Shared utility functions for tree walking

use std::cmp::Ordering;
use std::path::Path;

use glob::Pattern;

/// File stems treated as version-control metadata.
const VCS_METADATA_STEMS: &[&str] = &[".git", ".hg", ".svn"];

/// Check if a path names version-control metadata (`.git` and friends).
pub fn is_vcs_metadata(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| VCS_METADATA_STEMS.iter().any(|s| stem == *s))
        .unwrap_or(false)
}

/// Check if a path's name matches any of the ignore patterns.
pub fn matches_any_pattern(path: &Path, patterns: &[Pattern]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    patterns
        .iter()
        .any(|pattern| pattern.as_str() == name || pattern.matches(&name))
}

/// Order two sibling paths case-insensitively, falling back to the raw
/// name when they only differ in case.
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    let a_key = a.to_string_lossy().to_lowercase();
    let b_key = b.to_string_lossy().to_lowercase();
    a_key
        .cmp(&b_key)
        .then_with(|| a.file_name().cmp(&b.file_name()))
}
