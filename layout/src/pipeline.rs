//! The full layout pipeline.
//!
//! Runs the four passes in order over a single node tree and bundles every
//! intermediate map into a [`Layout`]. All passes share the identities handed
//! out by the walker, so the maps key into each other.

use blocktree_core::{Attributes, Container, FontMetrics, Node, NodeId, Orientation, ROOT};
use log::trace;
use rustc_hash::FxHashMap;

use crate::error::LayoutError;
use crate::grow::GrowWalker;
use crate::position::PositionWalker;
use crate::size::{Size, SizeWalker};
use crate::tree::TreeWalker;
use crate::walker::walk;

/// The resolved layout of one node tree at one viewport extent.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Parent to children, in document order. [`ROOT`] maps to the root node.
    pub tree: FxHashMap<NodeId, Vec<NodeId>>,
    /// Merged attribute snapshot per attributed node.
    pub attributes: FxHashMap<NodeId, Attributes>,
    /// Content-fit sizes, with the root pinned to the viewport.
    pub sizes: FxHashMap<NodeId, Container>,
    /// Final sizes after grow resolution.
    pub computed_sizes: FxHashMap<NodeId, Container>,
    /// Absolute top-left coordinate per node.
    pub positions: FxHashMap<NodeId, (u32, u32)>,
}

/// Resolves the layout of `root` within a viewport.
///
/// The root node's own extent is overridden to the viewport, so a grow-sized
/// top level fills the output surface.
///
/// # Errors
///
/// Returns [`LayoutError::MultilineText`] for text runs containing a line
/// break, [`LayoutError::InvalidFold`] when sibling sizes cannot be combined,
/// and [`LayoutError::Unresolved`] when a node leaves the fit pass without a
/// concrete extent.
pub fn compute_layout(
    root: &Node,
    viewport_height: u32,
    viewport_width: u32,
    metrics: &dyn FontMetrics,
) -> Result<Layout, LayoutError> {
    let mut builder = TreeWalker::default();
    walk(root, &mut builder)?;
    let TreeWalker { tree, attributes } = builder;

    let mut sizer = SizeWalker::new(&attributes, metrics);
    walk(root, &mut sizer)?;
    let mut sizes = sizer.into_sizes();

    let root_id = tree
        .get(&ROOT)
        .and_then(|roots| roots.first().copied())
        .ok_or(LayoutError::Unresolved { id: ROOT })?;
    let orientation = match sizes.get(&root_id) {
        Some(Size::Known(container)) => container.orientation,
        Some(Size::Unknown(orientation)) => *orientation,
        None => Orientation::default(),
    };
    sizes.insert(
        root_id,
        Size::Known(Container::new(viewport_height, viewport_width, orientation)),
    );
    trace!("layout: root {root_id} pinned to {viewport_width}x{viewport_height}");

    let fit = resolve(sizes)?;

    let mut grower = GrowWalker::new(fit.clone(), &attributes, &tree);
    walk(root, &mut grower)?;
    let computed_sizes = grower.into_sizes();

    let mut positioner = PositionWalker::new(&computed_sizes);
    walk(root, &mut positioner)?;
    let positions = positioner.into_positions();

    Ok(Layout {
        tree,
        attributes,
        sizes: fit,
        computed_sizes,
        positions,
    })
}

/// Demands a concrete extent for every node the fit pass visited.
fn resolve(sizes: FxHashMap<NodeId, Size>) -> Result<FxHashMap<NodeId, Container>, LayoutError> {
    sizes
        .into_iter()
        .map(|(id, size)| match size {
            Size::Known(container) => Ok((id, container)),
            Size::Unknown(_) => Err(LayoutError::Unresolved { id }),
        })
        .collect()
}
