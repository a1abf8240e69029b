//! Connector and continuation-prefix rendering

use std::fmt;
use std::path::Path;

use crate::error::TreeError;

use super::config::TreeConfig;
use super::node::{Ancestry, DisplayableNode};
use super::walker::{TreeWalk, TreeWalker};

pub const CONNECTOR_MIDDLE: &str = "├── ";
pub const CONNECTOR_LAST: &str = "└── ";
pub const SEGMENT_CONTINUE: &str = "│   ";
pub const SEGMENT_BLANK: &str = "    ";

/// One rendered tree line, split so formatters can style the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Continuation segments, outermost ancestor first
    pub prefix: String,
    /// Empty for the root
    pub connector: &'static str,
    pub name: String,
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.connector, self.name)
    }
}

/// Render a node using the ancestry of the walk that produced it.
pub fn render(node: &DisplayableNode, ancestry: &Ancestry) -> RenderedLine {
    if node.is_root() {
        return RenderedLine {
            prefix: String::new(),
            connector: "",
            name: node.display_name(),
        };
    }

    // The root contributes no segment, so stop at the first parentless record
    let mut segments = Vec::with_capacity(node.depth());
    let mut current = node.parent();
    while let Some(id) = current {
        let Some(next) = ancestry.parent(id) else {
            break;
        };
        segments.push(if ancestry.is_last(id) {
            SEGMENT_BLANK
        } else {
            SEGMENT_CONTINUE
        });
        current = Some(next);
    }
    segments.reverse();

    RenderedLine {
        prefix: segments.concat(),
        connector: if node.is_last() {
            CONNECTOR_LAST
        } else {
            CONNECTOR_MIDDLE
        },
        name: node.display_name(),
    }
}

/// Drain a walk into newline-terminated text, root first.
pub fn render_walk(mut walk: TreeWalk) -> String {
    let mut out = String::new();
    while let Some(node) = walk.next() {
        out.push_str(&render(&node, walk.ancestry()).to_string());
        out.push('\n');
    }
    out
}

/// Walk `root` and render the whole tree.
pub fn render_tree(root: &Path, config: &TreeConfig) -> Result<String, TreeError> {
    let walk = TreeWalker::new(config.clone()).walk(root)?;
    Ok(render_walk(walk))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::tree::{EntryFilter, TreeMode, build_tree};

    fn make_root(entries: &[&str]) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        for entry in entries {
            let path = root.join(entry);
            if entry.ends_with('/') {
                fs::create_dir_all(&path).unwrap();
            } else {
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(&path, "").unwrap();
            }
        }
        (dir, root)
    }

    #[test]
    fn test_flat_directory() {
        let (_dir, root) = make_root(&["a.txt", "B/", "c.txt"]);
        let text = render_tree(&root, &TreeConfig::default()).unwrap();
        assert_eq!(text, "root/\n├── a.txt\n├── B/\n└── c.txt\n");
    }

    #[test]
    fn test_empty_root_renders_name_only() {
        let (_dir, root) = make_root(&[]);
        let text = render_tree(&root, &TreeConfig::default()).unwrap();
        assert_eq!(text, "root/\n");
    }

    #[test]
    fn test_continuation_under_non_last_grandparent() {
        let (_dir, root) = make_root(&["a/b/deep.txt", "z.txt"]);
        let text = render_tree(&root, &TreeConfig::default()).unwrap();
        let expected = "\
root/
├── a/
│   └── b/
│       └── deep.txt
└── z.txt
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_blank_segment_under_last_grandparent() {
        let (_dir, root) = make_root(&["a.txt", "m/b/deep.txt", "m/c.txt"]);
        let text = render_tree(&root, &TreeConfig::default()).unwrap();
        let expected = "\
root/
├── a.txt
└── m/
    ├── b/
    │   └── deep.txt
    └── c.txt
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_root_line_has_no_connector() {
        let (_dir, root) = make_root(&["x/y/z.txt"]);
        let text = render_tree(&root, &TreeConfig::default()).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "root/");
        assert!(!first.contains(CONNECTOR_MIDDLE.trim_end()));
        assert!(!first.contains(CONNECTOR_LAST.trim_end()));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let (_dir, root) = make_root(&["a/1.txt", "a/2.txt", "b/c/3.txt", "d.txt"]);
        let mut walk = build_tree(&root, false, EntryFilter::AllowAll).unwrap();
        let nodes: Vec<_> = walk.by_ref().collect();

        let first: Vec<String> = nodes
            .iter()
            .map(|n| render(n, walk.ancestry()).to_string())
            .collect();
        let second: Vec<String> = nodes
            .iter()
            .rev()
            .map(|n| render(n, walk.ancestry()).to_string())
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        assert_eq!(first, second);
        assert_eq!(
            first.join("\n") + "\n",
            render_tree(&root, &TreeConfig::default()).unwrap()
        );
    }

    #[test]
    fn test_git_hidden_in_min_shown_in_full() {
        let (_dir, root) = make_root(&[".git/HEAD", "src/main.rs"]);

        let min = render_tree(&root, &TreeConfig::with_mode(TreeMode::Min)).unwrap();
        assert_eq!(min, "root/\n└── src/\n    └── main.rs\n");

        let full = render_tree(&root, &TreeConfig::with_mode(TreeMode::Full)).unwrap();
        assert_eq!(
            full,
            "root/\n├── .git/\n│   └── HEAD\n└── src/\n    └── main.rs\n"
        );
    }

    #[test]
    fn test_line_parts() {
        let (_dir, root) = make_root(&["a/b.txt", "c.txt"]);
        let mut walk = build_tree(&root, false, EntryFilter::AllowAll).unwrap();
        let lines: Vec<_> = std::iter::from_fn(|| {
            let node = walk.next()?;
            Some(render(&node, walk.ancestry()))
        })
        .collect();

        assert_eq!(lines[2].prefix, SEGMENT_CONTINUE);
        assert_eq!(lines[2].connector, CONNECTOR_LAST);
        assert_eq!(lines[2].name, "b.txt");
        assert_eq!(lines[3].prefix, "");
        assert_eq!(lines[3].connector, CONNECTOR_LAST);
    }
}
