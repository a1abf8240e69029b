//! TreeWalker - lazy pre-order traversal of a directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::TreeError;

use super::config::TreeConfig;
use super::filter::EntryFilter;
use super::node::{Ancestry, DisplayableNode, EntryKind, NodeId};
use super::utils::{compare_paths, is_vcs_metadata};

/// Walker configured from a [`TreeConfig`].
pub struct TreeWalker {
    config: TreeConfig,
}

impl TreeWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn walk(&self, root: &Path) -> Result<TreeWalk, TreeError> {
        build_tree(
            root,
            self.config.mode.include_hidden(),
            self.config.filter(),
        )
    }
}

/// Start a walk of `root`.
///
/// The root itself is listed up front so a missing or unreadable root fails
/// here, before any node is produced.
pub fn build_tree(
    root: &Path,
    include_hidden: bool,
    filter: EntryFilter,
) -> Result<TreeWalk, TreeError> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TreeError::RootNotFound(root.to_path_buf()),
        _ => TreeError::ListingDenied {
            path: root.to_path_buf(),
            source: e,
        },
    })?;
    if !metadata.is_dir() {
        return Err(TreeError::NotADirectory(root.to_path_buf()));
    }

    let rules = ListingRules {
        include_hidden,
        filter,
    };
    let children = rules
        .list(root)
        .map_err(|source| TreeError::ListingDenied {
            path: root.to_path_buf(),
            source,
        })?;

    let mut ancestry = Ancestry::default();
    let root_id = ancestry.push(None, false);

    Ok(TreeWalk {
        pending_root: Some(DisplayableNode {
            path: root.to_path_buf(),
            kind: EntryKind::Dir,
            id: Some(root_id),
            parent: None,
            is_last: false,
            depth: 0,
        }),
        pending_descent: None,
        stack: vec![Frame {
            parent: root_id,
            children: children.into_iter(),
        }],
        ancestry,
        rules,
    })
}

/// Filtered, sorted child ready to become a node.
#[derive(Debug)]
struct Child {
    path: PathBuf,
    kind: EntryKind,
    is_last: bool,
}

/// Siblings still to be emitted under one directory.
struct Frame {
    parent: NodeId,
    children: std::vec::IntoIter<Child>,
}

struct ListingRules {
    include_hidden: bool,
    filter: EntryFilter,
}

impl ListingRules {
    fn accepts(&self, path: &Path) -> bool {
        if !self.include_hidden && is_vcs_metadata(path) {
            return false;
        }
        self.filter.accepts(path)
    }

    /// Read, filter, and sort directory entries.
    fn list(&self, dir: &Path) -> io::Result<Vec<Child>> {
        let mut entries: Vec<(PathBuf, EntryKind)> = fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .filter(|entry| self.accepts(&entry.path()))
            .map(|entry| {
                let path = entry.path();
                let kind = entry_kind(&entry, &path);
                (path, kind)
            })
            .collect();
        entries.sort_by(|(a, _), (b, _)| compare_paths(a, b));

        let total = entries.len();
        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, (path, kind))| Child {
                path,
                kind,
                is_last: i + 1 == total,
            })
            .collect())
    }
}

fn entry_kind(entry: &fs::DirEntry, path: &Path) -> EntryKind {
    match entry.file_type() {
        Ok(ft) if ft.is_symlink() => EntryKind::Symlink {
            to_dir: path.is_dir(),
        },
        Ok(ft) if ft.is_dir() => EntryKind::Dir,
        Ok(_) => EntryKind::File,
        Err(_) if path.is_dir() => EntryKind::Dir,
        Err(_) => EntryKind::File,
    }
}

/// Lazy, finite, non-restartable sequence of [`DisplayableNode`]s in
/// pre-order.
///
/// A directory is listed only when the node after it is requested. Nodes
/// reference their parent through [`TreeWalk::ancestry`].
pub struct TreeWalk {
    pending_root: Option<DisplayableNode>,
    pending_descent: Option<(NodeId, PathBuf)>,
    stack: Vec<Frame>,
    ancestry: Ancestry,
    rules: ListingRules,
}

impl TreeWalk {
    /// Ancestry of every directory yielded so far.
    pub fn ancestry(&self) -> &Ancestry {
        &self.ancestry
    }

    fn descend(&mut self, id: NodeId, path: &Path) {
        let children = match self.rules.list(path) {
            Ok(children) => children,
            Err(e) => {
                log::warn!("cannot list '{}': {}, skipping", path.display(), e);
                Vec::new()
            }
        };
        self.stack.push(Frame {
            parent: id,
            children: children.into_iter(),
        });
    }
}

impl Iterator for TreeWalk {
    type Item = DisplayableNode;

    fn next(&mut self) -> Option<DisplayableNode> {
        if let Some(root) = self.pending_root.take() {
            return Some(root);
        }

        if let Some((id, path)) = self.pending_descent.take() {
            self.descend(id, &path);
        }

        loop {
            let frame = self.stack.last_mut()?;
            let Some(child) = frame.children.next() else {
                self.stack.pop();
                continue;
            };
            let parent = frame.parent;
            let depth = self.ancestry.depth(parent) + 1;

            let id = if child.kind == EntryKind::Dir {
                let id = self.ancestry.push(Some(parent), child.is_last);
                self.pending_descent = Some((id, child.path.clone()));
                Some(id)
            } else {
                None
            };

            return Some(DisplayableNode {
                path: child.path,
                kind: child.kind,
                id,
                parent: Some(parent),
                is_last: child.is_last,
                depth,
            });
        }
    }
}
