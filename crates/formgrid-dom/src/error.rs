//! Error types for document operations.

use crate::node::{ElementKind, NodeId};

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DomError>;

/// Errors raised by [`Document`](crate::Document) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node was never created or has been removed.
    #[error("node {0:?} does not exist in the document")]
    NodeNotFound(NodeId),

    /// The operation requires a different kind of element.
    #[error("node {node:?} is a <{}>, expected <{}>", .found.tag_name(), .expected.tag_name())]
    WrongKind {
        node: NodeId,
        expected: ElementKind,
        found: ElementKind,
    },

    /// Row or cell index past the end of its collection.
    #[error("index {index} is out of range for a collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Inserting the child would create a cycle or re-parent the root.
    #[error("cannot insert node {child:?} under {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// The node is not a direct child of the given parent.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// The markup writer failed.
    #[error("failed to render markup: {0}")]
    Render(String),
}

impl DomError {
    /// Create a wrong-kind error.
    pub fn wrong_kind(node: NodeId, expected: ElementKind, found: ElementKind) -> Self {
        Self::WrongKind {
            node,
            expected,
            found,
        }
    }
}
