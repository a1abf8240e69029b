//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line to
//! the console as soon as the walk yields it.

use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::tree::{EntryKind, RenderedLine, TreeMode};

use super::TreeOutput;
use super::config::OutputConfig;

/// Print the selected mode and root above the tree.
pub fn print_tree_header(config: &OutputConfig, mode: TreeMode, root: &Path) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(config.color_choice());
    for (label, value) in [
        ("Selected tree type", mode.to_string()),
        ("File structure for", root.display().to_string()),
    ] {
        write!(stdout, "{}\t:", label)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "{}", value)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }
    writeln!(stdout)
}

/// Console formatter - directory names in bold blue, symlinks in cyan.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let out = StandardStream::stdout(config.color_choice());
        Self { config, out }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn name_color(kind: EntryKind) -> Option<ColorSpec> {
        match kind {
            EntryKind::Dir => {
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(Color::Blue)).set_bold(true);
                Some(spec)
            }
            EntryKind::Symlink { .. } => {
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(Color::Cyan));
                Some(spec)
            }
            EntryKind::File => None,
        }
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_node(&mut self, line: &RenderedLine, kind: EntryKind) -> io::Result<()> {
        write!(self.out, "{}{}", line.prefix, line.connector)?;
        match Self::name_color(kind) {
            Some(spec) if self.config.use_color => {
                self.out.set_color(&spec)?;
                write!(self.out, "{}", line.name)?;
                self.out.reset()?;
            }
            _ => write!(self.out, "{}", line.name)?,
        }
        writeln!(self.out)
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        if self.config.show_summary {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "{} directories, {} files",
                dir_count, file_count
            )?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;

    fn line(prefix: &str, connector: &'static str, name: &str) -> RenderedLine {
        RenderedLine {
            prefix: prefix.to_string(),
            connector,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_plain_output() {
        let config = OutputConfig {
            use_color: false,
            show_summary: true,
        };
        let mut formatter = StreamingFormatter::with_writer(config, Buffer::no_color());
        formatter
            .output_node(&line("", "", "root/"), EntryKind::Dir)
            .unwrap();
        formatter
            .output_node(&line("", "└── ", "a.txt"), EntryKind::File)
            .unwrap();
        formatter.finish(0, 1).unwrap();

        let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert_eq!(text, "root/\n└── a.txt\n\n0 directories, 1 files\n");
    }

    #[test]
    fn test_colored_directory_name() {
        let config = OutputConfig {
            use_color: true,
            show_summary: false,
        };
        let mut formatter = StreamingFormatter::with_writer(config, Buffer::ansi());
        formatter
            .output_node(&line("│   ", "├── ", "src/"), EntryKind::Dir)
            .unwrap();
        formatter.finish(1, 0).unwrap();

        let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert!(text.starts_with("│   ├── \x1b["));
        assert!(text.contains("src/"));
        assert!(!text.contains("directories"));
    }
}
