//! Tree and report display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `streaming` - Console formatter for tree lines
//! - `report` - Console rendering of the diagnostic report

mod config;
mod report;
mod streaming;

use std::io;

use crate::tree::{EntryKind, RenderedLine, TreeWalk, render};

// Re-export public types and functions
pub use config::OutputConfig;
pub use report::{print_report, write_report};
pub use streaming::{StreamingFormatter, print_tree_header};

/// Callback for streaming output - receives one rendered line per node.
pub trait TreeOutput {
    fn output_node(&mut self, line: &RenderedLine, kind: EntryKind) -> io::Result<()>;

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()>;
}

impl<T: TreeOutput + ?Sized> TreeOutput for &mut T {
    fn output_node(&mut self, line: &RenderedLine, kind: EntryKind) -> io::Result<()> {
        (**self).output_node(line, kind)
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        (**self).finish(dir_count, file_count)
    }
}

/// Feed every line to both outputs.
impl<A: TreeOutput, B: TreeOutput> TreeOutput for (A, B) {
    fn output_node(&mut self, line: &RenderedLine, kind: EntryKind) -> io::Result<()> {
        self.0.output_node(line, kind)?;
        self.1.output_node(line, kind)
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        self.0.finish(dir_count, file_count)?;
        self.1.finish(dir_count, file_count)
    }
}

/// Collects the plain tree text, one newline-terminated line per node.
#[derive(Debug, Default)]
pub struct TextCollector {
    text: String,
}

impl TextCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl TreeOutput for TextCollector {
    fn output_node(&mut self, line: &RenderedLine, _kind: EntryKind) -> io::Result<()> {
        self.text.push_str(&line.to_string());
        self.text.push('\n');
        Ok(())
    }

    fn finish(&mut self, _dir_count: usize, _file_count: usize) -> io::Result<()> {
        Ok(())
    }
}

/// Entry counts, root excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCounts {
    pub dirs: usize,
    pub files: usize,
}

/// Render each node as the walk yields it - returns the entry counts.
pub fn stream_tree<O: TreeOutput>(mut walk: TreeWalk, output: &mut O) -> io::Result<TreeCounts> {
    let mut counts = TreeCounts::default();
    while let Some(node) = walk.next() {
        let line = render(&node, walk.ancestry());
        output.output_node(&line, node.kind())?;
        if node.is_root() {
            continue;
        }
        if node.kind().shows_as_dir() {
            counts.dirs += 1;
        } else {
            counts.files += 1;
        }
    }
    output.finish(counts.dirs, counts.files)?;
    Ok(counts)
}
