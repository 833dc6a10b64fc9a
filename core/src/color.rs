//! Named colors and their RGBA values.

/// The named palette available to block attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Pure white.
    White,
    /// Pure black.
    Black,
    /// Teal.
    Teal,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Red.
    Red,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
    /// Brown.
    Brown,
    /// Gray.
    Gray,
    /// Cyan.
    Cyan,
    /// Magenta.
    Magenta,
}

/// Normalized RGBA color components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red component in `0.0..=1.0`.
    pub r: f32,
    /// Green component in `0.0..=1.0`.
    pub g: f32,
    /// Blue component in `0.0..=1.0`.
    pub b: f32,
    /// Alpha component in `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    /// Constructs an RGBA value from its components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Color {
    /// Returns the RGBA value of this named color.
    #[must_use]
    pub const fn rgba(self) -> Rgba {
        match self {
            Self::White => Rgba::new(1.0, 1.0, 1.0, 1.0),
            Self::Black => Rgba::new(0.0, 0.0, 0.0, 1.0),
            Self::Teal => Rgba::new(0.0, 1.0, 1.0, 1.0),
            Self::Blue => Rgba::new(0.0, 0.0, 1.0, 1.0),
            Self::Green => Rgba::new(0.5, 1.0, 0.5, 1.0),
            Self::Orange => Rgba::new(1.0, 0.5, 0.0, 1.0),
            Self::Yellow => Rgba::new(1.0, 1.0, 0.0, 1.0),
            Self::Red => Rgba::new(1.0, 0.0, 0.0, 1.0),
            Self::Purple => Rgba::new(0.5, 0.0, 0.5, 1.0),
            Self::Pink => Rgba::new(0.9, 0.5, 0.6, 1.0),
            Self::Brown => Rgba::new(0.4, 0.25, 0.1, 1.0),
            Self::Gray => Rgba::new(0.5, 0.5, 0.5, 1.0),
            Self::Cyan => Rgba::new(0.0, 1.0, 1.0, 1.0),
            Self::Magenta => Rgba::new(1.0, 0.0, 1.0, 1.0),
        }
    }
}
