//! The block tree.
//!
//! Five node kinds cover the whole component taxonomy: leaves ([`Node::Text`]
//! and [`Node::Rect`]), orientation containers ([`Node::Direction`]), ordered
//! multi-child groups ([`Node::Group`]), attribute wrappers
//! ([`Node::Attributed`]), and user-composed blocks ([`Node::Composed`]).
//! Dispatch over the kind is exhaustive pattern matching; a new kind cannot
//! silently fall through to the composed default.

use core::any::type_name;

use crate::attributes::Attributes;
use crate::font::FontMetrics;
use crate::geometry::Orientation;

/// A node in the declarative block tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single-line text run.
    Text(Text),
    /// A rectangle leaf. Has no intrinsic extent; it is sized through the
    /// attributes of an enclosing wrapper.
    Rect,
    /// An orientation container wrapping one subtree. Children beneath it
    /// stack along the declared orientation.
    Direction(Direction),
    /// An ordered, possibly empty group of heterogeneous children.
    Group(Vec<Node>),
    /// A single child plus an attribute record.
    Attributed(Attributed),
    /// A user-defined block, reduced to its body. Traversal recurses into
    /// the delegate transparently; only the tag survives for identity.
    Composed(Composed),
}

/// Payload of a [`Node::Text`] leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// The text to lay out. Multi-line labels are rejected by the sizing
    /// pass.
    pub label: String,
}

impl Text {
    /// Measured width: `chars x (glyph width + spacing) x scale` minus one
    /// trailing spacing unit.
    #[must_use]
    pub fn width(&self, scale: u32, metrics: &dyn FontMetrics) -> u32 {
        let chars = u32::try_from(self.label.chars().count()).unwrap_or(u32::MAX);
        (chars * metrics.glyph_width() * scale + chars * metrics.glyph_spacing() * scale)
            .saturating_sub(metrics.glyph_spacing() * scale)
    }

    /// Measured height: `glyph height x scale`.
    #[must_use]
    pub fn height(&self, scale: u32, metrics: &dyn FontMetrics) -> u32 {
        metrics.glyph_height() * scale
    }
}

/// Payload of a [`Node::Direction`] container.
#[derive(Debug, Clone, PartialEq)]
pub struct Direction {
    /// Stacking axis for everything beneath this container.
    pub orientation: Orientation,
    /// The wrapped subtree.
    pub child: Box<Node>,
}

/// Payload of a [`Node::Attributed`] wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributed {
    /// The attribute record exposed to the sizing passes.
    pub attributes: Attributes,
    /// The wrapped child.
    pub child: Box<Node>,
}

/// Payload of a [`Node::Composed`] block.
#[derive(Debug, Clone, PartialEq)]
pub struct Composed {
    /// Short type name of the user block, used for structural identity.
    pub tag: &'static str,
    /// The block's body.
    pub child: Box<Node>,
}

impl Node {
    /// The type tag feeding structural identity.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Text(_) => "Text",
            Self::Rect => "Rect",
            Self::Direction(_) => "Direction",
            Self::Group(_) => "Group",
            Self::Attributed(_) => "Attributed",
            Self::Composed(composed) => composed.tag,
        }
    }

    /// Extends this node's attributes, wrapping it first when it is not an
    /// attributed node yet. Chained builder calls therefore accumulate into
    /// a single wrapper.
    pub(crate) fn with_attributes(self, apply: impl FnOnce(&mut Attributes)) -> Self {
        match self {
            Self::Attributed(mut attributed) => {
                apply(&mut attributed.attributes);
                Self::Attributed(attributed)
            }
            other => {
                let mut attributes = Attributes::default();
                apply(&mut attributes);
                Self::Attributed(Attributed {
                    attributes,
                    child: Box::new(other),
                })
            }
        }
    }
}

/// A user-composed block.
///
/// Implementors describe their body declaratively; [`Block::to_node`] wraps
/// the body in a composed node tagged with the implementing type's name so
/// that structurally identical trees built from different block types get
/// distinct identities.
pub trait Block {
    /// Produces the block's subtree.
    fn body(&self) -> Node;

    /// Reduces this block to a tree node.
    fn to_node(&self) -> Node
    where
        Self: Sized,
    {
        let full = type_name::<Self>();
        let tag = full.rsplit("::").next().unwrap_or(full);
        Node::Composed(Composed {
            tag,
            child: Box::new(self.body()),
        })
    }
}

/// Creates a text leaf.
#[must_use]
pub fn text(label: impl Into<String>) -> Node {
    Node::Text(Text {
        label: label.into(),
    })
}

/// Creates a rectangle leaf.
#[must_use]
pub const fn rect() -> Node {
    Node::Rect
}

/// Creates an orientation container.
///
/// A single child is wrapped directly; several children are packed into a
/// group first, mirroring how variadic composition builds the tree.
#[must_use]
pub fn direction(orientation: Orientation, children: impl Into<Vec<Node>>) -> Node {
    let mut children = children.into();
    let child = if children.len() == 1 {
        children.remove(0)
    } else {
        Node::Group(children)
    };
    Node::Direction(Direction {
        orientation,
        child: Box::new(child),
    })
}

/// Creates an ordered group, e.g. from iteration or an optional child.
/// An empty group is valid and resolves to a zero-sized container.
#[must_use]
pub fn group(children: impl Into<Vec<Node>>) -> Node {
    Node::Group(children.into())
}
