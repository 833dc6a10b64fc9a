//! Structural node identity.
//!
//! Every tree position gets a 64-bit id derived purely from its parent's id,
//! the node's type tag, and (for group children) its sibling index. Ids are
//! recomputed on every traversal; because the function is pure, independent
//! passes arrive at identical ids for identical trees and can share per-node
//! maps without carrying references around.

use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Opaque 64-bit identifier for a node within one layout invocation.
pub type NodeId = u64;

/// Synthetic anchor id for the implicit root. Never a real component.
pub const ROOT: NodeId = 0;

/// Computes the id of a node from its structural inputs.
///
/// `index` is `Some` only for children of a multi-child group, where two
/// siblings of the same kind would otherwise collide. Ids must never be
/// cached on nodes: the same component value can occur at several tree
/// positions with different ids.
#[must_use]
pub fn node_id(parent: NodeId, tag: &str, index: Option<usize>) -> NodeId {
    let mut hasher = FxHasher::default();
    parent.hash(&mut hasher);
    tag.hash(&mut hasher);
    if let Some(index) = index {
        index.hash(&mut hasher);
    }
    hasher.finish()
}
