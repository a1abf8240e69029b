//! Entry filtering for tree walking

use std::fmt;
use std::path::Path;

use glob::Pattern;

use super::utils::{is_vcs_metadata, matches_any_pattern};

/// Inclusion filter applied to every directory entry, at every depth.
#[derive(Clone, Default)]
pub enum EntryFilter {
    /// Accept everything
    #[default]
    AllowAll,
    /// Drop hidden/VCS-metadata entries such as `.git`
    ExcludeHidden,
    /// Drop entries whose name matches one of the glob patterns
    Ignore(Vec<Pattern>),
    /// Caller-supplied predicate
    Custom(fn(&Path) -> bool),
}

impl EntryFilter {
    /// Build an ignore filter from glob strings, skipping invalid patterns.
    pub fn ignore_patterns<S: AsRef<str>>(patterns: &[S]) -> Self {
        let compiled = patterns
            .iter()
            .filter_map(|p| match Pattern::new(p.as_ref()) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("ignoring invalid pattern '{}': {}", p.as_ref(), e);
                    None
                }
            })
            .collect::<Vec<_>>();
        if compiled.is_empty() {
            EntryFilter::AllowAll
        } else {
            EntryFilter::Ignore(compiled)
        }
    }

    /// Check if a path should be included.
    pub fn accepts(&self, path: &Path) -> bool {
        match self {
            EntryFilter::AllowAll => true,
            EntryFilter::ExcludeHidden => !is_vcs_metadata(path),
            EntryFilter::Ignore(patterns) => !matches_any_pattern(path, patterns),
            EntryFilter::Custom(predicate) => predicate(path),
        }
    }
}

impl fmt::Debug for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryFilter::AllowAll => f.write_str("AllowAll"),
            EntryFilter::ExcludeHidden => f.write_str("ExcludeHidden"),
            EntryFilter::Ignore(patterns) => f
                .debug_tuple("Ignore")
                .field(&patterns.iter().map(Pattern::as_str).collect::<Vec<_>>())
                .finish(),
            EntryFilter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
