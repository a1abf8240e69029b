//! Directory tree walking and rendering
//!
//! `TreeWalk` lazily yields one `DisplayableNode` per entry in pre-order.
//! Nodes point at their parent directory through an index into the walk's
//! `Ancestry`, which is all `render` needs to draw the connector prefix.

mod config;
mod filter;
mod mode;
mod node;
mod render;
mod utils;
mod walker;

// Re-export public types
pub use config::TreeConfig;
pub use filter::EntryFilter;
pub use mode::TreeMode;
pub use node::{Ancestry, DisplayableNode, EntryKind, NodeId};
pub use render::{
    CONNECTOR_LAST, CONNECTOR_MIDDLE, RenderedLine, SEGMENT_BLANK, SEGMENT_CONTINUE, render,
    render_tree, render_walk,
};
pub use utils::is_vcs_metadata;
pub use walker::{TreeWalk, TreeWalker, build_tree};
