//! Layout failure taxonomy.
//!
//! Fatal conditions abort the whole `compute_layout` call: unsupported
//! input (multi-line text) and internal-consistency violations (a size fold
//! combination the rules do not define, or a node still unresolved after
//! the fit pass). Missing per-node lookups in later passes are deliberately
//! *not* errors; empty or optional subtrees legitimately produce partial
//! coverage and are skipped.

use blocktree_core::NodeId;
use thiserror::Error;

use crate::size::Size;

/// Errors raised by the layout passes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The tree contains a text label with a line break, which the sizing
    /// pass does not support.
    #[error("multi-line text is not supported (node {id})")]
    MultilineText {
        /// Id of the offending text node.
        id: NodeId,
    },

    /// The fold rule met a parent/child size combination it does not
    /// define. Valid trees never produce this; it indicates a traversal or
    /// identity bug.
    #[error("undefined size fold at node {id}: parent {parent:?}, child {child:?}")]
    InvalidFold {
        /// Id of the child whose fold was undefined.
        id: NodeId,
        /// Parent state at the time of the fold.
        parent: Size,
        /// Child state at the time of the fold.
        child: Size,
    },

    /// A node was still unresolved when the fit pass finished.
    #[error("node {id} has no resolved size after the fit pass")]
    Unresolved {
        /// Id of the unresolved node.
        id: NodeId,
    },
}
