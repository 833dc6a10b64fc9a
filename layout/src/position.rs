//! Absolute positioning.
//!
//! The final pass turns the resolved sizes into top-left coordinates. A
//! cursor tracks where the next node lands; every `Direction` pushes a frame
//! so siblings advance along the declared axis and the cursor snaps back when
//! the frame closes.

use blocktree_core::{Container, Node, NodeId, Orientation};
use log::warn;
use rustc_hash::FxHashMap;

use crate::error::LayoutError;
use crate::walker::{WalkContext, Walker};

/// An open `Direction` during the walk: the point its children flow from and
/// the axis they flow along.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u32,
    y: u32,
    orientation: Orientation,
}

impl Frame {
    fn advanced(self, size: Container) -> Self {
        match self.orientation {
            Orientation::Horizontal => Self {
                x: self.x + size.width,
                ..self
            },
            Orientation::Vertical => Self {
                y: self.y + size.height,
                ..self
            },
        }
    }
}

/// Top-down walker that assigns each node an absolute top-left coordinate.
#[derive(Debug)]
pub struct PositionWalker<'a> {
    positions: FxHashMap<NodeId, (u32, u32)>,
    sizes: &'a FxHashMap<NodeId, Container>,
    x: u32,
    y: u32,
    frames: Vec<Frame>,
}

impl<'a> PositionWalker<'a> {
    /// Creates a positioner over the fully resolved sizes.
    #[must_use]
    pub fn new(sizes: &'a FxHashMap<NodeId, Container>) -> Self {
        Self {
            positions: FxHashMap::default(),
            sizes,
            x: 0,
            y: 0,
            frames: Vec::new(),
        }
    }

    /// Consumes the walker and returns the per-node coordinates.
    #[must_use]
    pub fn into_positions(self) -> FxHashMap<NodeId, (u32, u32)> {
        self.positions
    }

    fn size_of(&self, id: NodeId) -> Option<Container> {
        let size = self.sizes.get(&id).copied();
        if size.is_none() {
            warn!("position: no resolved size for {id}, skipping advance");
        }
        size
    }
}

impl Walker for PositionWalker<'_> {
    fn before(&mut self, cx: &WalkContext, node: &Node) -> Result<(), LayoutError> {
        self.positions.insert(cx.current, (self.x, self.y));
        if let Node::Direction(dir) = node {
            self.frames.push(Frame {
                x: self.x,
                y: self.y,
                orientation: dir.orientation,
            });
        }
        Ok(())
    }

    fn after(&mut self, cx: &WalkContext, node: &Node) -> Result<(), LayoutError> {
        if matches!(node, Node::Direction(_)) {
            let frame = self.frames.pop();
            let Some(size) = self.size_of(cx.current) else {
                return Ok(());
            };
            if let Some(frame) = frame {
                // Flow continues from the frame's origin, past this node,
                // along the axis the surrounding flow runs on.
                let axis = self
                    .frames
                    .last()
                    .map_or(size.orientation, |enclosing| enclosing.orientation);
                match axis {
                    Orientation::Horizontal => {
                        self.x = frame.x + size.width;
                        self.y = frame.y;
                    }
                    Orientation::Vertical => {
                        self.x = frame.x;
                        self.y = frame.y + size.height;
                    }
                }
            }
        } else if let Some(size) = self.size_of(cx.current) {
            match size.orientation {
                Orientation::Horizontal => self.x += size.width,
                Orientation::Vertical => self.y += size.height,
            }
        }
        Ok(())
    }

    fn before_child(&mut self, _cx: &WalkContext, _node: &Node) -> Result<(), LayoutError> {
        if let Some(frame) = self.frames.last() {
            self.x = frame.x;
            self.y = frame.y;
        }
        Ok(())
    }

    fn after_child(&mut self, cx: &WalkContext, _node: &Node) -> Result<(), LayoutError> {
        if let Some(size) = self.size_of(cx.current)
            && let Some(frame) = self.frames.last_mut()
        {
            *frame = frame.advanced(size);
        }
        Ok(())
    }
}
