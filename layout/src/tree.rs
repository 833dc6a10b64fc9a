//! First pass: tree reconstruction and attribute snapshots.

use blocktree_core::{Attributes, Node, NodeId};
use rustc_hash::FxHashMap;

use crate::error::LayoutError;
use crate::walker::{WalkContext, Walker};

/// Rebuilds the parent/child edge map and snapshots the attribute record of
/// every attributed node. Purely structural; it cannot fail.
#[derive(Debug, Default)]
pub struct TreeWalker {
    /// Parent id to ordered child ids. Insertion order is traversal order
    /// and is load-bearing for main-axis stacking.
    pub tree: FxHashMap<NodeId, Vec<NodeId>>,
    /// Attribute snapshots, present only for attributed nodes.
    pub attributes: FxHashMap<NodeId, Attributes>,
}

impl Walker for TreeWalker {
    fn before(&mut self, cx: &WalkContext, node: &Node) -> Result<(), LayoutError> {
        self.tree.entry(cx.parent).or_default().push(cx.current);
        if let Node::Attributed(attributed) = node {
            // Snapshot against the defaults; each wrapper stands alone and
            // does not inherit from siblings.
            self.attributes
                .insert(cx.current, Attributes::default().merge(&attributed.attributes));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blocktree_core::{Orientation, ROOT, Sizing, direction, group, rect, text};

    use super::*;
    use crate::walker::walk;

    #[test]
    fn edges_follow_document_order() {
        let tree = direction(Orientation::Horizontal, [text("a"), text("b"), text("c")]);
        let mut builder = TreeWalker::default();
        walk(&tree, &mut builder).unwrap();

        let root = builder.tree[&ROOT][0];
        let packed = builder.tree[&root][0];
        assert_eq!(builder.tree[&packed].len(), 3);
    }

    #[test]
    fn only_attributed_nodes_get_snapshots() {
        let tree = direction(
            Orientation::Vertical,
            [rect().width(Sizing::Fixed(10)), rect()],
        );
        let mut builder = TreeWalker::default();
        walk(&tree, &mut builder).unwrap();
        assert_eq!(builder.attributes.len(), 1);
        let snapshot = builder.attributes.values().next().unwrap();
        assert_eq!(snapshot.width, Sizing::Fixed(10));
    }

    #[test]
    fn empty_groups_still_appear_in_the_tree() {
        let tree = group([]);
        let mut builder = TreeWalker::default();
        walk(&tree, &mut builder).unwrap();
        let root = builder.tree[&ROOT][0];
        assert!(!builder.tree.contains_key(&root));
        assert_eq!(builder.tree[&ROOT], vec![root]);
    }
}
