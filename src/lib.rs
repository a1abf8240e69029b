//! servdiag - directory tree and host diagnostics snapshots

pub mod error;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{ReportError, TreeError};
pub use output::{OutputConfig, StreamingFormatter, TextCollector, TreeOutput, stream_tree};
pub use report::{DiagnosticReport, HostProbe, Probe, ReportConfig, assemble, save_artifacts};
pub use tree::{
    DisplayableNode, EntryFilter, TreeConfig, TreeMode, TreeWalk, TreeWalker, build_tree, render,
    render_tree,
};
