//! The traversal contract shared by every pass.
//!
//! A pass implements the four [`Walker`] hooks; [`walk`] drives one full
//! depth-first traversal, computing each node's structural id before
//! `before` fires, pushing it as the current id for the subtree, and
//! restoring the caller's id once `after` returns. Children of a
//! multi-child group are additionally bracketed by `before_child` /
//! `after_child` with the child's id already in effect, so a pass can reset
//! and advance per-child cursors.
//!
//! The driver also threads the ambient orientation: a direction container's
//! subtree sees the declared orientation, scoped to that subtree.

use blocktree_core::{Node, NodeId, Orientation, ROOT, node_id};

use crate::error::LayoutError;

/// Identity and orientation context for one hook invocation.
#[derive(Debug, Clone, Copy)]
pub struct WalkContext {
    /// The id of the node being visited.
    pub current: NodeId,
    /// The id of the enclosing node ([`ROOT`] for the outermost block).
    pub parent: NodeId,
    /// The stacking axis in effect at this node.
    pub orientation: Orientation,
}

/// Hooks invoked by [`walk`] as it descends the tree.
///
/// `before`/`after` bracket a node's own processing; `before_child` /
/// `after_child` bracket each child of a multi-child group. All hooks
/// default to no-ops so a pass only implements what it needs.
pub trait Walker {
    /// Called when a node is entered, before its subtree.
    fn before(&mut self, cx: &WalkContext, node: &Node) -> Result<(), LayoutError> {
        let _ = (cx, node);
        Ok(())
    }

    /// Called when a node is left, after its subtree.
    fn after(&mut self, cx: &WalkContext, node: &Node) -> Result<(), LayoutError> {
        let _ = (cx, node);
        Ok(())
    }

    /// Called before each child of a group, with the child's context.
    fn before_child(&mut self, cx: &WalkContext, child: &Node) -> Result<(), LayoutError> {
        let _ = (cx, child);
        Ok(())
    }

    /// Called after each child of a group, with the child's context.
    fn after_child(&mut self, cx: &WalkContext, child: &Node) -> Result<(), LayoutError> {
        let _ = (cx, child);
        Ok(())
    }
}

/// Performs one full depth-first traversal of `node` with `walker`.
pub fn walk<W: Walker>(node: &Node, walker: &mut W) -> Result<(), LayoutError> {
    let id = node_id(ROOT, node.tag(), None);
    visit(node, walker, ROOT, id, Orientation::default())
}

fn visit<W: Walker>(
    node: &Node,
    walker: &mut W,
    parent: NodeId,
    current: NodeId,
    orientation: Orientation,
) -> Result<(), LayoutError> {
    let cx = WalkContext {
        current,
        parent,
        orientation,
    };
    walker.before(&cx, node)?;
    match node {
        Node::Text(_) | Node::Rect => {}
        Node::Direction(dir) => {
            let child = dir.child.as_ref();
            let child_id = node_id(current, child.tag(), None);
            visit(child, walker, current, child_id, dir.orientation)?;
        }
        Node::Group(children) => {
            for (index, child) in children.iter().enumerate() {
                let child_id = node_id(current, child.tag(), Some(index));
                let child_cx = WalkContext {
                    current: child_id,
                    parent: current,
                    orientation,
                };
                walker.before_child(&child_cx, child)?;
                visit(child, walker, current, child_id, orientation)?;
                walker.after_child(&child_cx, child)?;
            }
        }
        Node::Attributed(attributed) => {
            // An attributed text run is a single node: the wrapper carries
            // the text metrics, so the leaf is not traversed separately.
            if !matches!(attributed.child.as_ref(), Node::Text(_)) {
                let child = attributed.child.as_ref();
                let child_id = node_id(current, child.tag(), None);
                visit(child, walker, current, child_id, orientation)?;
            }
        }
        Node::Composed(composed) => {
            let child = composed.child.as_ref();
            let child_id = node_id(current, child.tag(), None);
            visit(child, walker, current, child_id, orientation)?;
        }
    }
    walker.after(&cx, node)
}
