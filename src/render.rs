//! Turning a resolved [`Layout`] into draw calls.
//!
//! The render walk is a fifth traversal over the same tree: it looks up each
//! visual node's coordinate and extent and hands a backend-agnostic primitive
//! to a [`Renderer`]. Backends only ever see absolute pixels.

use blocktree_core::{Color, Node, Rgba};
use blocktree_layout::{Layout, LayoutError, WalkContext, Walker, walk};
use log::warn;

/// A draw target for one frame.
///
/// Calls arrive in document order, so later primitives paint over earlier
/// ones.
pub trait Renderer {
    /// Draws a filled quad.
    fn draw_quad(&mut self, quad: RenderableQuad);
    /// Draws a single text run.
    fn draw_text(&mut self, text: RenderableText);
}

/// A rectangle ready to draw, in absolute pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderableQuad {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Extent along x.
    pub width: u32,
    /// Extent along y.
    pub height: u32,
    /// Fill color.
    pub color: Rgba,
    /// Border color.
    pub border_color: Rgba,
    /// Border thickness in pixels.
    pub border_width: u32,
    /// Corner radius in pixels.
    pub corner_radius: u32,
}

/// A text run ready to draw, in absolute pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableText {
    /// The glyphs to draw.
    pub label: String,
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Glyph scale factor.
    pub scale: u32,
    /// Glyph color.
    pub foreground: Rgba,
    /// Backdrop color behind the run.
    pub background: Rgba,
}

/// Emits draw calls for every visual node in `layout`.
///
/// Styled rects and styled text draw from their attribute wrapper's record;
/// bare text draws white on black at scale 1. Bare rects have no extent and
/// produce nothing.
///
/// # Errors
///
/// The walk itself is infallible over an already-resolved layout; the
/// `Result` mirrors the other passes so callers can chain with `?`.
pub fn render<R: Renderer>(
    root: &Node,
    layout: &Layout,
    drawer: &mut R,
) -> Result<(), LayoutError> {
    let mut walker = RenderWalker { layout, drawer };
    walk(root, &mut walker)
}

struct RenderWalker<'a, R: Renderer> {
    layout: &'a Layout,
    drawer: &'a mut R,
}

impl<R: Renderer> RenderWalker<'_, R> {
    fn coordinate(&self, cx: &WalkContext) -> Option<(u32, u32)> {
        let position = self.layout.positions.get(&cx.current).copied();
        if position.is_none() {
            warn!("render: no position for {}, skipping", cx.current);
        }
        position
    }
}

impl<R: Renderer> Walker for RenderWalker<'_, R> {
    fn before(&mut self, cx: &WalkContext, node: &Node) -> Result<(), LayoutError> {
        match node {
            Node::Attributed(attributed) => {
                let Some((x, y)) = self.coordinate(cx) else {
                    return Ok(());
                };
                let attributes = self
                    .layout
                    .attributes
                    .get(&cx.current)
                    .unwrap_or(&attributed.attributes);
                match attributed.child.as_ref() {
                    Node::Rect => {
                        let Some(size) = self.layout.computed_sizes.get(&cx.current) else {
                            return Ok(());
                        };
                        self.drawer.draw_quad(RenderableQuad {
                            x,
                            y,
                            width: size.width,
                            height: size.height,
                            color: attributes
                                .background
                                .map_or(Rgba::TRANSPARENT, Color::rgba),
                            border_color: attributes
                                .border_color
                                .map_or(Rgba::TRANSPARENT, Color::rgba),
                            border_width: attributes.border_width.unwrap_or(0),
                            corner_radius: attributes.border_radius.unwrap_or(0),
                        });
                    }
                    Node::Text(run) => {
                        self.drawer.draw_text(RenderableText {
                            label: run.label.clone(),
                            x,
                            y,
                            scale: attributes.scale.unwrap_or(1),
                            foreground: attributes
                                .foreground
                                .map_or(Color::White.rgba(), Color::rgba),
                            background: attributes
                                .background
                                .map_or(Color::Black.rgba(), Color::rgba),
                        });
                    }
                    _ => {}
                }
            }
            Node::Text(run) => {
                let Some((x, y)) = self.coordinate(cx) else {
                    return Ok(());
                };
                self.drawer.draw_text(RenderableText {
                    label: run.label.clone(),
                    x,
                    y,
                    scale: 1,
                    foreground: Color::White.rgba(),
                    background: Color::Black.rgba(),
                });
            }
            _ => {}
        }
        Ok(())
    }
}
