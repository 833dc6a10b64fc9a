//! Lays out a small banner and prints the draw calls.
//!
//! Run with `RUST_LOG=trace` to watch the passes work.

use blocktree::prelude::*;
use blocktree::render::{RenderableQuad, RenderableText};

struct Banner;

impl Block for Banner {
    fn body(&self) -> Node {
        direction(
            Orientation::Vertical,
            vec![
                text("blocktree").scale(2).foreground(Color::Teal),
                rect()
                    .width(Sizing::Grow)
                    .height(Sizing::Fixed(2))
                    .background(Color::Gray),
                direction(
                    Orientation::Horizontal,
                    vec![
                        rect()
                            .width(Sizing::Fixed(40))
                            .height(Sizing::Fixed(20))
                            .background(Color::Red),
                        rect()
                            .width(Sizing::Grow)
                            .height(Sizing::Fixed(20))
                            .background(Color::Blue),
                    ],
                ),
            ],
        )
    }
}

struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn draw_quad(&mut self, quad: RenderableQuad) {
        println!(
            "quad  {:>4},{:<4} {}x{} fill {:?}",
            quad.x, quad.y, quad.width, quad.height, quad.color
        );
    }

    fn draw_text(&mut self, text: RenderableText) {
        println!(
            "text  {:>4},{:<4} x{} {:?}",
            text.x, text.y, text.scale, text.label
        );
    }
}

fn main() -> Result<(), blocktree::LayoutError> {
    env_logger::init();
    let ui = Banner.to_node();
    let layout = compute_layout(&ui, 240, 320, &DefaultFontMetrics)?;
    render(&ui, &layout, &mut StdoutRenderer)?;
    Ok(())
}
