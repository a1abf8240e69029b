//! Configuration types for tree walkers

use super::filter::EntryFilter;
use super::mode::TreeMode;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    pub mode: TreeMode,
    /// Glob patterns matched against entry names (`-I`)
    pub ignore_patterns: Vec<String>,
}

impl TreeConfig {
    pub fn with_mode(mode: TreeMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Filter built from the ignore patterns.
    pub fn filter(&self) -> EntryFilter {
        EntryFilter::ignore_patterns(&self.ignore_patterns)
    }
}
