//! Per-node layout and style attributes.
//!
//! Attributes are attached to a subtree by wrapping it in an attributed
//! node; the builder methods on [`Node`] do this implicitly. Merging is
//! left-biased: a later-applied set overrides only the fields it explicitly
//! sets, and defaults never clobber a previously set value.

use crate::color::Color;
use crate::node::Node;

/// Per-axis sizing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sizing {
    /// Pin the axis to an exact pixel value.
    Fixed(u32),
    /// Derive the axis from content.
    #[default]
    Fit,
    /// Claim leftover space from the parent after siblings are satisfied.
    Grow,
}

/// Optional edge insets. Unset edges contribute zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    /// Top inset in pixels.
    pub top: Option<u32>,
    /// Right inset in pixels.
    pub right: Option<u32>,
    /// Bottom inset in pixels.
    pub bottom: Option<u32>,
    /// Left inset in pixels.
    pub left: Option<u32>,
}

impl Padding {
    /// The same inset on all four edges.
    #[must_use]
    pub const fn all(inset: u32) -> Self {
        Self {
            top: Some(inset),
            right: Some(inset),
            bottom: Some(inset),
            left: Some(inset),
        }
    }

    /// Horizontal insets on left/right, vertical insets on top/bottom.
    #[must_use]
    pub const fn axes(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: Some(vertical),
            right: Some(horizontal),
            bottom: Some(vertical),
            left: Some(horizontal),
        }
    }

    /// Total horizontal inset (left + right).
    #[must_use]
    pub fn horizontal(&self) -> u32 {
        self.left.unwrap_or(0) + self.right.unwrap_or(0)
    }

    /// Total vertical inset (top + bottom).
    #[must_use]
    pub fn vertical(&self) -> u32 {
        self.top.unwrap_or(0) + self.bottom.unwrap_or(0)
    }
}

/// The full attribute record carried by an attributed node.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    /// Width sizing policy.
    pub width: Sizing,
    /// Height sizing policy.
    pub height: Sizing,
    /// Foreground (text) color.
    pub foreground: Option<Color>,
    /// Background fill color.
    pub background: Option<Color>,
    /// Border stroke color.
    pub border_color: Option<Color>,
    /// Border stroke width in pixels.
    pub border_width: Option<u32>,
    /// Border corner radius in pixels.
    pub border_radius: Option<u32>,
    /// Glyph scale multiplier for text.
    pub scale: Option<u32>,
    /// Edge insets added around the content.
    pub padding: Option<Padding>,
}

impl Attributes {
    /// Merges `other` over `self`, keeping `self`'s value for every field
    /// `other` leaves at its default.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        if other.width != Sizing::Fit {
            merged.width = other.width;
        }
        if other.height != Sizing::Fit {
            merged.height = other.height;
        }
        if other.foreground.is_some() {
            merged.foreground = other.foreground;
        }
        if other.background.is_some() {
            merged.background = other.background;
        }
        if other.border_color.is_some() {
            merged.border_color = other.border_color;
        }
        if other.border_width.is_some() {
            merged.border_width = other.border_width;
        }
        if other.border_radius.is_some() {
            merged.border_radius = other.border_radius;
        }
        if other.scale.is_some() {
            merged.scale = other.scale;
        }
        if other.padding.is_some() {
            merged.padding = other.padding;
        }
        merged
    }
}

impl Node {
    /// Sets the width sizing policy, wrapping in an attributed node if
    /// this node does not carry attributes yet.
    #[must_use]
    pub fn width(self, width: Sizing) -> Self {
        self.with_attributes(|attributes| attributes.width = width)
    }

    /// Sets the height sizing policy.
    #[must_use]
    pub fn height(self, height: Sizing) -> Self {
        self.with_attributes(|attributes| attributes.height = height)
    }

    /// Sets the foreground (text) color.
    #[must_use]
    pub fn foreground(self, color: Color) -> Self {
        self.with_attributes(|attributes| attributes.foreground = Some(color))
    }

    /// Sets the background fill color.
    #[must_use]
    pub fn background(self, color: Color) -> Self {
        self.with_attributes(|attributes| attributes.background = Some(color))
    }

    /// Sets the border stroke color.
    #[must_use]
    pub fn border_color(self, color: Color) -> Self {
        self.with_attributes(|attributes| attributes.border_color = Some(color))
    }

    /// Sets the border stroke width.
    #[must_use]
    pub fn border_width(self, width: u32) -> Self {
        self.with_attributes(|attributes| attributes.border_width = Some(width))
    }

    /// Sets the border corner radius.
    #[must_use]
    pub fn border_radius(self, radius: u32) -> Self {
        self.with_attributes(|attributes| attributes.border_radius = Some(radius))
    }

    /// Sets the glyph scale multiplier for text content.
    #[must_use]
    pub fn scale(self, scale: u32) -> Self {
        self.with_attributes(|attributes| attributes.scale = Some(scale))
    }

    /// Applies the same padding to all four edges.
    #[must_use]
    pub fn padding(self, inset: u32) -> Self {
        self.with_attributes(|attributes| attributes.padding = Some(Padding::all(inset)))
    }

    /// Applies an explicit [`Padding`] record.
    #[must_use]
    pub fn padding_edges(self, padding: Padding) -> Self {
        self.with_attributes(|attributes| attributes.padding = Some(padding))
    }

    /// Applies horizontal and vertical axis padding.
    #[must_use]
    pub fn padding_axes(self, horizontal: u32, vertical: u32) -> Self {
        self.with_attributes(|attributes| {
            attributes.padding = Some(Padding::axes(horizontal, vertical));
        })
    }
}
