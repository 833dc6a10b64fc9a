//! Geometry primitives shared by the layout passes.

/// Stacking axis of a container's children.
///
/// The orientation decides which axis is the main axis (sizes sum along it)
/// and which is the cross axis (sizes take the max).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Children stack left to right.
    Horizontal,
    /// Children stack top to bottom.
    #[default]
    Vertical,
}

/// A resolved extent produced by the sizing passes.
///
/// The `orientation` records the stacking axis in effect at the node that
/// produced this container, which is not necessarily the parent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    /// Resolved height in pixels.
    pub height: u32,
    /// Resolved width in pixels.
    pub width: u32,
    /// Stacking axis in effect when this container was produced.
    pub orientation: Orientation,
}

impl Container {
    /// Constructs a container with the given extent and orientation.
    #[must_use]
    pub const fn new(height: u32, width: u32, orientation: Orientation) -> Self {
        Self {
            height,
            width,
            orientation,
        }
    }

    /// A zero-sized container at the given orientation.
    #[must_use]
    pub const fn empty(orientation: Orientation) -> Self {
        Self::new(0, 0, orientation)
    }
}
