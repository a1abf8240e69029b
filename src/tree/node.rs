//! Displayable nodes and the ancestry table they point into

use std::path::{Path, PathBuf};

/// Index of a directory node in its walk's [`Ancestry`].
///
/// Only meaningful for the walk that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What kind of filesystem entry a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// Symbolic links are never followed
    Symlink { to_dir: bool },
}

impl EntryKind {
    /// Whether the entry renders with a trailing `/`.
    pub fn shows_as_dir(&self) -> bool {
        matches!(self, EntryKind::Dir | EntryKind::Symlink { to_dir: true })
    }
}

/// One entry in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayableNode {
    pub(crate) path: PathBuf,
    pub(crate) kind: EntryKind,
    pub(crate) id: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) is_last: bool,
    pub(crate) depth: usize,
}

impl DisplayableNode {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Ancestry handle for directories, used as `parent` by their children.
    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// File name, suffixed with `/` for directories.
    ///
    /// Paths without a final component (`.`, `/`) use the path text itself.
    pub fn display_name(&self) -> String {
        let mut name = self
            .path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string());
        if self.kind.shows_as_dir() && !name.ends_with('/') {
            name.push('/');
        }
        name
    }
}

#[derive(Debug, Clone, Copy)]
struct AncestorRecord {
    parent: Option<NodeId>,
    is_last: bool,
    depth: usize,
}

/// Append-only `child -> parent` relation for the directories of one walk.
#[derive(Debug, Default)]
pub struct Ancestry {
    records: Vec<AncestorRecord>,
}

impl Ancestry {
    pub(crate) fn push(&mut self, parent: Option<NodeId>, is_last: bool) -> NodeId {
        let depth = parent.map_or(0, |p| self.depth(p) + 1);
        self.records.push(AncestorRecord {
            parent,
            is_last,
            depth,
        });
        NodeId(self.records.len() - 1)
    }

    fn record(&self, id: NodeId) -> Option<&AncestorRecord> {
        self.records.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.record(id).and_then(|r| r.parent)
    }

    pub fn is_last(&self, id: NodeId) -> bool {
        self.record(id).is_some_and(|r| r.is_last)
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.record(id).map_or(0, |r| r.depth)
    }

    /// Number of directories seen so far, root included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(path: &str, kind: EntryKind) -> DisplayableNode {
        DisplayableNode {
            path: PathBuf::from(path),
            kind,
            id: None,
            parent: None,
            is_last: false,
            depth: 0,
        }
    }

    #[test]
    fn test_display_name_suffixes_directories() {
        assert_eq!(node("root/src", EntryKind::Dir).display_name(), "src/");
        assert_eq!(node("root/main.rs", EntryKind::File).display_name(), "main.rs");
        assert_eq!(
            node("root/link", EntryKind::Symlink { to_dir: true }).display_name(),
            "link/"
        );
        assert_eq!(
            node("root/link", EntryKind::Symlink { to_dir: false }).display_name(),
            "link"
        );
    }

    #[test]
    fn test_display_name_without_file_name() {
        assert_eq!(node(".", EntryKind::Dir).display_name(), "./");
        assert_eq!(node("/", EntryKind::Dir).display_name(), "/");
    }

    #[test]
    fn test_ancestry_depths_and_parents() {
        let mut ancestry = Ancestry::default();
        let root = ancestry.push(None, false);
        let child = ancestry.push(Some(root), true);
        let grandchild = ancestry.push(Some(child), false);

        assert_eq!(ancestry.len(), 3);
        assert_eq!(ancestry.depth(root), 0);
        assert_eq!(ancestry.depth(grandchild), 2);
        assert_eq!(ancestry.parent(grandchild), Some(child));
        assert_eq!(ancestry.parent(root), None);
        assert!(ancestry.is_last(child));
        assert!(!ancestry.is_last(grandchild));
    }
}
