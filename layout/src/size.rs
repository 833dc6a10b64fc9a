//! Second pass: bottom-up intrinsic ("fit") sizing.
//!
//! Every node starts either `Known` (leaves, attributed wrappers, empty
//! groups) or `Unknown` (containers waiting on their content). As the
//! traversal unwinds, each node folds its own size into its parent: the
//! first known child fixes an unknown parent's dimensions outright, and
//! subsequent known children accumulate along the parent's orientation
//! (main-axis sum, cross-axis max). Any other combination means the tree
//! was malformed by a traversal bug and is fatal.

use blocktree_core::{Attributes, Container, FontMetrics, Node, NodeId, Orientation, Sizing, Text};
use log::trace;
use rustc_hash::FxHashMap;

use crate::error::LayoutError;
use crate::walker::{WalkContext, Walker};

/// A node's sizing state during the fit pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Orientation fixed, dimensions pending on content.
    Unknown(Orientation),
    /// Fully resolved.
    Known(Container),
}

/// The intrinsic size resolver.
pub struct SizeWalker<'a> {
    sizes: FxHashMap<NodeId, Size>,
    attributes: &'a FxHashMap<NodeId, Attributes>,
    metrics: &'a dyn FontMetrics,
}

impl core::fmt::Debug for SizeWalker<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SizeWalker")
            .field("sizes", &self.sizes)
            .finish_non_exhaustive()
    }
}

impl<'a> SizeWalker<'a> {
    /// Creates a resolver over the tree builder's attribute snapshots.
    pub fn new(attributes: &'a FxHashMap<NodeId, Attributes>, metrics: &'a dyn FontMetrics) -> Self {
        Self {
            sizes: FxHashMap::default(),
            attributes,
            metrics,
        }
    }

    /// Consumes the walker, yielding the per-node size map.
    #[must_use]
    pub fn into_sizes(self) -> FxHashMap<NodeId, Size> {
        self.sizes
    }

    fn measure_text(&self, id: NodeId, text: &Text, scale: u32) -> Result<(u32, u32), LayoutError> {
        if text.label.contains('\n') {
            return Err(LayoutError::MultilineText { id });
        }
        Ok((
            text.width(scale, self.metrics),
            text.height(scale, self.metrics),
        ))
    }

    fn apply(
        &mut self,
        cx: &WalkContext,
        attributes: &Attributes,
        child: &Node,
    ) -> Result<(), LayoutError> {
        let (mut width, mut height) = if let Node::Text(run) = child {
            // Text always reports its own metrics; fixed sizing does not
            // apply to a text child.
            self.measure_text(cx.current, run, attributes.scale.unwrap_or(1))?
        } else {
            let width = match attributes.width {
                Sizing::Fixed(value) => value,
                // Deferred to the grow pass.
                Sizing::Fit | Sizing::Grow => 0,
            };
            let height = match attributes.height {
                Sizing::Fixed(value) => value,
                Sizing::Fit | Sizing::Grow => 0,
            };
            (width, height)
        };
        if let Some(padding) = &attributes.padding {
            width += padding.horizontal();
            height += padding.vertical();
        }
        self.sizes.insert(
            cx.current,
            Size::Known(Container::new(height, width, cx.orientation)),
        );
        Ok(())
    }
}

impl Walker for SizeWalker<'_> {
    fn before(&mut self, cx: &WalkContext, node: &Node) -> Result<(), LayoutError> {
        match node {
            Node::Attributed(attributed) => {
                // The snapshot was taken by the tree builder; fall back to
                // the node's own record if a pass runs standalone.
                let attributes = self
                    .attributes
                    .get(&cx.current)
                    .unwrap_or(&attributed.attributes)
                    .clone();
                self.apply(cx, &attributes, attributed.child.as_ref())?;
            }
            Node::Text(run) => {
                let (width, height) = self.measure_text(cx.current, run, 1)?;
                self.sizes.insert(
                    cx.current,
                    Size::Known(Container::new(height, width, cx.orientation)),
                );
            }
            Node::Rect => {
                // A bare rect has no extent until attributes give it one.
                self.sizes
                    .insert(cx.current, Size::Known(Container::empty(cx.orientation)));
            }
            Node::Group(children) if children.is_empty() => {
                // Absent optional children still resolve to a valid
                // zero-sized container.
                self.sizes
                    .insert(cx.current, Size::Known(Container::empty(cx.orientation)));
            }
            Node::Group(_) | Node::Composed(_) => {
                self.sizes.insert(cx.current, Size::Unknown(cx.orientation));
            }
            Node::Direction(dir) => {
                self.sizes
                    .insert(cx.current, Size::Unknown(dir.orientation));
            }
        }
        Ok(())
    }

    fn after(&mut self, cx: &WalkContext, _node: &Node) -> Result<(), LayoutError> {
        let (Some(&parent), Some(&own)) =
            (self.sizes.get(&cx.parent), self.sizes.get(&cx.current))
        else {
            return Ok(());
        };
        let folded = match (parent, own) {
            // The first known child fixes the parent's dimensions outright.
            (Size::Unknown(orientation), Size::Known(child)) => {
                Container::new(child.height, child.width, orientation)
            }
            // Later children accumulate along the parent's orientation.
            (Size::Known(acc), Size::Known(child)) => match acc.orientation {
                Orientation::Horizontal => Container::new(
                    acc.height.max(child.height),
                    acc.width + child.width,
                    Orientation::Horizontal,
                ),
                Orientation::Vertical => Container::new(
                    acc.height + child.height,
                    acc.width.max(child.width),
                    Orientation::Vertical,
                ),
            },
            (Size::Unknown(_), Size::Unknown(_)) | (Size::Known(_), Size::Unknown(_)) => {
                return Err(LayoutError::InvalidFold {
                    id: cx.current,
                    parent,
                    child: own,
                });
            }
        };
        trace!("fold {} into {}: {folded:?}", cx.current, cx.parent);
        self.sizes.insert(cx.parent, Size::Known(folded));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blocktree_core::{DefaultFontMetrics, ROOT, Sizing, direction, group, rect, text};

    use super::*;
    use crate::tree::TreeWalker;
    use crate::walker::walk;

    fn sizes_of(node: &Node) -> (TreeWalker, FxHashMap<NodeId, Size>) {
        let mut builder = TreeWalker::default();
        walk(node, &mut builder).unwrap();
        let metrics = DefaultFontMetrics;
        let mut sizer = SizeWalker::new(&builder.attributes, &metrics);
        walk(node, &mut sizer).unwrap();
        let sizes = sizer.into_sizes();
        (builder, sizes)
    }

    fn fixed_rect(width: u32, height: u32) -> Node {
        rect().width(Sizing::Fixed(width)).height(Sizing::Fixed(height))
    }

    #[test]
    fn horizontal_children_sum_widths_and_max_heights() {
        let tree = direction(
            Orientation::Horizontal,
            [fixed_rect(50, 30), fixed_rect(40, 60), fixed_rect(30, 40)],
        );
        let (builder, sizes) = sizes_of(&tree);
        let dir = builder.tree[&ROOT][0];
        let packed = builder.tree[&dir][0];
        assert_eq!(
            sizes[&packed],
            Size::Known(Container::new(60, 120, Orientation::Horizontal))
        );
    }

    #[test]
    fn vertical_children_sum_heights_and_max_widths() {
        let tree = direction(
            Orientation::Vertical,
            [fixed_rect(100, 20), fixed_rect(60, 30), fixed_rect(100, 20)],
        );
        let (builder, sizes) = sizes_of(&tree);
        let dir = builder.tree[&ROOT][0];
        let packed = builder.tree[&dir][0];
        assert_eq!(
            sizes[&packed],
            Size::Known(Container::new(70, 100, Orientation::Vertical))
        );
    }

    #[test]
    fn empty_group_resolves_to_zero() {
        let tree = direction(Orientation::Horizontal, [group([])]);
        let (builder, sizes) = sizes_of(&tree);
        let dir = builder.tree[&ROOT][0];
        let empty = builder.tree[&dir][0];
        assert_eq!(
            sizes[&empty],
            Size::Known(Container::empty(Orientation::Horizontal))
        );
    }

    #[test]
    fn text_scale_and_padding_stack() {
        // "Padding" is 7 chars: 7*5 + 7*1 - 1 = 41 wide, 7 tall, plus 10
        // padding on every edge.
        let tree = text("Padding").padding(10);
        let (builder, sizes) = sizes_of(&tree);
        let id = builder.tree[&ROOT][0];
        assert_eq!(
            sizes[&id],
            Size::Known(Container::new(27, 61, Orientation::Vertical))
        );
    }

    #[test]
    fn text_metrics_override_fixed_sizing() {
        let tree = text("Hi").width(Sizing::Fixed(500));
        let (builder, sizes) = sizes_of(&tree);
        let id = builder.tree[&ROOT][0];
        // 2 chars: 2*5 + 2*1 - 1 = 11.
        assert_eq!(
            sizes[&id],
            Size::Known(Container::new(7, 11, Orientation::Vertical))
        );
    }

    #[test]
    fn grow_and_fit_axes_resolve_to_zero_in_the_fit_pass() {
        let tree = rect().width(Sizing::Grow).height(Sizing::Fit);
        let (builder, sizes) = sizes_of(&tree);
        let id = builder.tree[&ROOT][0];
        assert_eq!(
            sizes[&id],
            Size::Known(Container::empty(Orientation::Vertical))
        );
    }

    #[test]
    fn multiline_text_is_rejected() {
        let tree = text("two\nlines");
        let mut builder = TreeWalker::default();
        walk(&tree, &mut builder).unwrap();
        let metrics = DefaultFontMetrics;
        let mut sizer = SizeWalker::new(&builder.attributes, &metrics);
        let err = walk(&tree, &mut sizer).unwrap_err();
        assert!(matches!(err, LayoutError::MultilineText { .. }));
    }

    #[test]
    fn deep_nesting_carries_the_leaf_size_up() {
        let tree = direction(
            Orientation::Horizontal,
            [direction(
                Orientation::Vertical,
                [direction(Orientation::Horizontal, [fixed_rect(10, 10)])],
            )],
        );
        let (builder, sizes) = sizes_of(&tree);
        let outer = builder.tree[&ROOT][0];
        let Size::Known(container) = sizes[&outer] else {
            panic!("outer direction should be resolved");
        };
        assert_eq!((container.width, container.height), (10, 10));
    }

    #[test]
    fn sizes_cover_every_node_in_the_tree() {
        let tree = direction(
            Orientation::Horizontal,
            [fixed_rect(10, 10), group([text("a"), text("b")]), group([])],
        );
        let (builder, sizes) = sizes_of(&tree);
        for children in builder.tree.values() {
            for id in children {
                assert!(sizes.contains_key(id), "node {id} has no size");
            }
        }
    }
}
