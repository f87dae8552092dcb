//! Node identifiers and element kinds.

use slotmap::new_key_type;

new_key_type! {
    /// A stable handle to a node in a [`MemoryDocument`](crate::MemoryDocument).
    ///
    /// Handles stay valid while the tree around them changes and become
    /// invalid once the node is removed.
    pub struct NodeId;
}

/// The element types a grid is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The document root.
    Body,
    /// A generic container.
    Div,
    /// A `<table>`.
    Table,
    /// A table row, `<tr>`.
    Row,
    /// A table cell, `<td>`.
    Cell,
    /// A single-line text control, `<input type="text">`.
    TextInput,
    /// A static text element, `<p>`.
    Paragraph,
}

impl ElementKind {
    /// The HTML tag name for this kind.
    pub fn tag_name(self) -> &'static str {
        match self {
            ElementKind::Body => "body",
            ElementKind::Div => "div",
            ElementKind::Table => "table",
            ElementKind::Row => "tr",
            ElementKind::Cell => "td",
            ElementKind::TextInput => "input",
            ElementKind::Paragraph => "p",
        }
    }

    /// Returns `true` for elements that cannot hold children.
    pub fn is_void(self) -> bool {
        matches!(self, ElementKind::TextInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(ElementKind::Table.tag_name(), "table");
        assert_eq!(ElementKind::Row.tag_name(), "tr");
        assert_eq!(ElementKind::Cell.tag_name(), "td");
        assert_eq!(ElementKind::TextInput.tag_name(), "input");
        assert_eq!(ElementKind::Paragraph.tag_name(), "p");
    }

    #[test]
    fn test_void_elements() {
        assert!(ElementKind::TextInput.is_void());
        assert!(!ElementKind::Paragraph.is_void());
        assert!(!ElementKind::Cell.is_void());
    }
}
