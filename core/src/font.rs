//! Font metric capability used to measure text leaves.

/// Glyph metrics consumed by the intrinsic size pass.
///
/// The engine assumes a monospace font: every glyph is `glyph_width` wide,
/// `glyph_height` tall, with `glyph_spacing` between consecutive glyphs.
pub trait FontMetrics {
    /// Width of a single glyph in pixels.
    fn glyph_width(&self) -> u32;

    /// Height of a single glyph in pixels.
    fn glyph_height(&self) -> u32;

    /// Spacing between consecutive glyphs in pixels.
    fn glyph_spacing(&self) -> u32;
}

/// Default metrics for a 5x7 pixel font with one pixel of spacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFontMetrics;

impl FontMetrics for DefaultFontMetrics {
    fn glyph_width(&self) -> u32 {
        5
    }

    fn glyph_height(&self) -> u32 {
        7
    }

    fn glyph_spacing(&self) -> u32 {
        1
    }
}
