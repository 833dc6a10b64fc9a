//! Layout passes for the blocktree layout engine.
//!
//! [`compute_layout`] runs four sequential traversals over a block tree:
//!
//! 1. [`walker::walk`] with the tree builder reconstructs parent/child edges
//!    and snapshots per-node attributes,
//! 2. the intrinsic size pass resolves every node's natural ("fit") size
//!    bottom-up,
//! 3. the grow pass distributes leftover space to nodes declared `Grow`
//!    top-down,
//! 4. the position pass converts resolved sizes into absolute coordinates.
//!
//! All four passes re-derive identical node ids from the shared structural
//! identity scheme, so the per-node maps produced by one pass can be looked
//! up by the next. The pipeline is a pure function of the tree, the
//! viewport, and the font metrics.

pub mod error;
pub mod grow;
pub mod pipeline;
pub mod position;
pub mod size;
pub mod tree;
pub mod walker;

pub use error::LayoutError;
pub use grow::GrowWalker;
pub use pipeline::{Layout, compute_layout};
pub use position::PositionWalker;
pub use size::{Size, SizeWalker};
pub use tree::TreeWalker;
pub use walker::{WalkContext, Walker, walk};

#[cfg(test)]
mod tests;
