//! Grow resolution.
//!
//! The fit pass leaves grow-sized axes at zero. This pass walks top down and
//! stretches them against the parent extents resolved one level above, so a
//! single traversal settles arbitrarily deep grow chains.

use blocktree_core::{Attributes, Container, Node, NodeId, Sizing};
use log::trace;
use rustc_hash::FxHashMap;

use crate::error::LayoutError;
use crate::walker::{WalkContext, Walker};

/// Top-down walker that stretches grow-sized axes into the parent extent.
///
/// Operates on a working copy of the fit sizes so callers keep the
/// pre-grow map intact for inspection.
pub struct GrowWalker<'a> {
    sizes: FxHashMap<NodeId, Container>,
    attributes: &'a FxHashMap<NodeId, Attributes>,
    tree: &'a FxHashMap<NodeId, Vec<NodeId>>,
}

impl<'a> GrowWalker<'a> {
    /// Seeds the walker with the fit sizes and the structural context it
    /// resolves against.
    #[must_use]
    pub fn new(
        sizes: FxHashMap<NodeId, Container>,
        attributes: &'a FxHashMap<NodeId, Attributes>,
        tree: &'a FxHashMap<NodeId, Vec<NodeId>>,
    ) -> Self {
        Self {
            sizes,
            attributes,
            tree,
        }
    }

    /// Consumes the walker and returns the resolved sizes.
    #[must_use]
    pub fn into_sizes(self) -> FxHashMap<NodeId, Container> {
        self.sizes
    }

    /// Splits the parent's width across its growing children.
    ///
    /// Non-growing siblings keep their fit width; the remainder is divided
    /// evenly and any fraction lost to integer division stays unclaimed.
    fn grown_width(&self, parent_id: NodeId, parent: Container) -> u32 {
        let Some(siblings) = self.tree.get(&parent_id) else {
            return parent.width;
        };
        let mut growing = 0u32;
        let mut fixed = 0u32;
        for sibling in siblings {
            let grows = self
                .attributes
                .get(sibling)
                .is_some_and(|attributes| attributes.width == Sizing::Grow);
            if grows {
                growing += 1;
            } else if let Some(container) = self.sizes.get(sibling) {
                fixed += container.width;
            }
        }
        if growing == 0 {
            // The attribute record said grow but the sibling scan found no
            // grower. Treat the node as the only claimant.
            return parent.width;
        }
        let remaining = parent.width.saturating_sub(fixed);
        remaining / growing
    }
}

impl Walker for GrowWalker<'_> {
    fn before(&mut self, cx: &WalkContext, node: &Node) -> Result<(), LayoutError> {
        let Some(parent) = self.sizes.get(&cx.parent).copied() else {
            // The root has no resolved parent; its extent was pinned to the
            // viewport before this pass.
            return Ok(());
        };
        let Some(mut own) = self.sizes.get(&cx.current).copied() else {
            return Ok(());
        };
        if let Some(attributes) = self.attributes.get(&cx.current) {
            let mut touched = false;
            if attributes.height == Sizing::Grow {
                own.height = parent.height;
                touched = true;
            }
            if attributes.width == Sizing::Grow {
                own.width = self.grown_width(cx.parent, parent);
                touched = true;
            }
            if touched {
                trace!(
                    "grow {}: {}x{} within {}x{}",
                    cx.current, own.width, own.height, parent.width, parent.height
                );
                self.sizes.insert(cx.current, own);
            }
            return Ok(());
        }
        // Containers without an attribute record fill whatever their parent
        // offers, but never shrink below their fit size.
        if matches!(node, Node::Direction(_) | Node::Group(_)) {
            own.width = own.width.max(parent.width);
            own.height = own.height.max(parent.height);
            self.sizes.insert(cx.current, own);
        }
        Ok(())
    }
}
