//! A declarative block layout engine.
//!
//! Blocktree turns a tree of declarative blocks into absolute pixel
//! coordinates. Trees are built from a handful of primitives ([`text`],
//! [`rect`], [`direction`], [`group`]) plus chained attribute builders, and
//! resolved in four deterministic passes by [`compute_layout`]. Every node is
//! identified by its structural path, so the same tree shape yields the same
//! ids run after run.
//!
//! ```
//! use blocktree::prelude::*;
//!
//! let ui = direction(
//!     Orientation::Horizontal,
//!     vec![
//!         text("Hello"),
//!         rect().width(Sizing::Grow).height(Sizing::Fixed(2)),
//!     ],
//! );
//! let layout = compute_layout(&ui, 480, 640, &DefaultFontMetrics)?;
//! assert!(!layout.positions.is_empty());
//! # Ok::<(), blocktree::LayoutError>(())
//! ```
//!
//! Reusable components implement [`Block`] and compose through `body`, the
//! same way the primitives compose. The [`render`] module walks a resolved
//! layout and hands absolute-pixel primitives to a [`render::Renderer`]
//! backend.

pub mod render;

pub use blocktree_core::{
    Attributes, Block, Color, Container, DefaultFontMetrics, FontMetrics, Node, NodeId,
    Orientation, Padding, ROOT, Rgba, Sizing, Text, direction, group, node_id, rect, text,
};
pub use blocktree_layout::{Layout, LayoutError, compute_layout};

/// The items almost every consumer wants in scope.
pub mod prelude {
    pub use crate::render::{Renderer, render};
    pub use crate::{
        Block, Color, DefaultFontMetrics, Node, Orientation, Sizing, compute_layout, direction,
        group, rect, text,
    };
}
