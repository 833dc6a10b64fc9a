//! Core component model for the blocktree layout engine.
//!
//! A user interface is described as a tree of [`Node`]s: text and rectangle
//! leaves, orientation containers, ordered groups, and attribute wrappers.
//! This crate defines that tree, the [`Attributes`] that can be attached to
//! it, the structural [`node_id`] scheme that gives every tree position a
//! stable identity, and the [`FontMetrics`] capability used to measure text.
//!
//! The layout passes themselves live in `blocktree-layout`; rendering glue
//! lives in the `blocktree` facade crate.

pub mod attributes;
pub mod color;
pub mod font;
pub mod geometry;
pub mod id;
pub mod node;

pub use attributes::{Attributes, Padding, Sizing};
pub use color::{Color, Rgba};
pub use font::{DefaultFontMetrics, FontMetrics};
pub use geometry::{Container, Orientation};
pub use id::{NodeId, ROOT, node_id};
pub use node::{Block, Node, Text, direction, group, rect, text};
