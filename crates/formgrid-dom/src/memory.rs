//! Arena-backed in-memory document.

use slotmap::SlotMap;

use crate::document::Document;
use crate::error::{DomError, Result};
use crate::logging::targets;
use crate::node::{ElementKind, NodeId};

/// Per-node storage.
#[derive(Debug, Clone)]
struct NodeData {
    kind: ElementKind,
    element_id: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Current value of a text input.
    value: String,
    /// Own text, rendered before any children.
    text: String,
}

impl NodeData {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            element_id: None,
            parent: None,
            children: Vec::new(),
            value: String::new(),
            text: String::new(),
        }
    }
}

/// An in-memory document tree.
///
/// Nodes live in a slot map and are addressed by [`NodeId`]. The document
/// always has a `<body>` root; elements are created detached and become
/// visible to [`element_by_id`](Document::element_by_id) once they are
/// connected to the body.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: SlotMap<NodeId, NodeData>,
    body: NodeId,
}

impl MemoryDocument {
    /// Create an empty document containing only a body.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(NodeData::new(ElementKind::Body));
        Self { nodes, body }
    }

    /// The root `<body>` node.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a `<div>` with the given id and attach it to the body.
    pub fn create_container(&mut self, id: &str) -> NodeId {
        let mut data = NodeData::new(ElementKind::Div);
        data.element_id = Some(id.to_string());
        data.parent = Some(self.body);
        let div = self.nodes.insert(data);
        self.nodes[self.body].children.push(div);
        div
    }

    /// Returns `true` if the node exists.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of live nodes, the body included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the node is attached, directly or not, to the body.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.body {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Render the subtree rooted at `node` as HTML.
    pub fn to_html(&self, node: NodeId) -> Result<String> {
        crate::html::render(self, node)
    }

    pub(crate) fn element_id(&self, node: NodeId) -> Result<Option<&str>> {
        Ok(self.get(node)?.element_id.as_deref())
    }

    pub(crate) fn own_value(&self, node: NodeId) -> Result<&str> {
        Ok(&self.get(node)?.value)
    }

    pub(crate) fn own_text(&self, node: NodeId) -> Result<&str> {
        Ok(&self.get(node)?.text)
    }

    pub(crate) fn child_slice(&self, node: NodeId) -> Result<&[NodeId]> {
        Ok(&self.get(node)?.children)
    }

    fn get(&self, node: NodeId) -> Result<&NodeData> {
        self.nodes.get(node).ok_or(DomError::NodeNotFound(node))
    }

    fn get_mut(&mut self, node: NodeId) -> Result<&mut NodeData> {
        self.nodes.get_mut(node).ok_or(DomError::NodeNotFound(node))
    }

    fn expect_kind(&self, node: NodeId, expected: ElementKind) -> Result<&NodeData> {
        let data = self.get(node)?;
        if data.kind != expected {
            return Err(DomError::wrong_kind(node, expected, data.kind));
        }
        Ok(data)
    }

    /// Unlink a node from its parent, leaving it alive.
    fn detach(&mut self, node: NodeId) {
        let parent = self.nodes.get_mut(node).and_then(|n| n.parent.take());
        if let Some(parent) = parent
            && let Some(p) = self.nodes.get_mut(parent)
        {
            p.children.retain(|&c| c != node);
        }
    }

    /// Free a node and all of its descendants. The node must be detached.
    fn destroy_subtree(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(data) = self.nodes.remove(id) {
                stack.extend(data.children);
            }
        }
    }

    fn insert_child_at(
        &mut self,
        parent: NodeId,
        expected: ElementKind,
        child_kind: ElementKind,
        index: Option<usize>,
    ) -> Result<NodeId> {
        let len = self.expect_kind(parent, expected)?.children.len();
        let index = index.unwrap_or(len);
        if index > len {
            return Err(DomError::IndexOutOfRange { index, len });
        }

        let mut data = NodeData::new(child_kind);
        data.parent = Some(parent);
        let child = self.nodes.insert(data);
        self.nodes[parent].children.insert(index, child);
        Ok(child)
    }

    fn delete_child_at(&mut self, parent: NodeId, expected: ElementKind, index: usize) -> Result<()> {
        let children = &self.expect_kind(parent, expected)?.children;
        let child = *children.get(index).ok_or(DomError::IndexOutOfRange {
            index,
            len: children.len(),
        })?;
        self.detach(child);
        self.destroy_subtree(child);
        Ok(())
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn create_element(&mut self, kind: ElementKind) -> NodeId {
        self.nodes.insert(NodeData::new(kind))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(node, data)| data.element_id.as_deref() == Some(id) && self.is_connected(*node))
            .map(|(node, _)| node)
    }

    fn set_element_id(&mut self, node: NodeId, id: &str) -> Result<()> {
        self.get_mut(node)?.element_id = Some(id.to_string());
        Ok(())
    }

    fn kind(&self, node: NodeId) -> Result<ElementKind> {
        Ok(self.get(node)?.kind)
    }

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(node)?.parent)
    }

    fn children(&self, node: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.get(node)?.children.clone())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_kind = self.get(parent)?.kind;
        self.get(child)?;

        // The child may not be the parent itself or one of its ancestors.
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == child {
                return Err(DomError::HierarchyRequest { parent, child });
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        if child == self.body || parent_kind.is_void() {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        tracing::trace!(target: targets::DOM, ?parent, ?child, "appended child");
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(parent)?;
        if self.get(child)?.parent != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(())
    }

    fn remove_node(&mut self, node: NodeId) -> Result<()> {
        self.get(node)?;
        if node == self.body {
            return Err(DomError::HierarchyRequest {
                parent: node,
                child: node,
            });
        }
        self.detach(node);
        self.destroy_subtree(node);
        tracing::trace!(target: targets::DOM, ?node, "removed node");
        Ok(())
    }

    fn insert_row(&mut self, table: NodeId, index: Option<usize>) -> Result<NodeId> {
        self.insert_child_at(table, ElementKind::Table, ElementKind::Row, index)
    }

    fn delete_row(&mut self, table: NodeId, index: usize) -> Result<()> {
        self.delete_child_at(table, ElementKind::Table, index)
    }

    fn rows(&self, table: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.expect_kind(table, ElementKind::Table)?.children.clone())
    }

    fn insert_cell(&mut self, row: NodeId, index: Option<usize>) -> Result<NodeId> {
        self.insert_child_at(row, ElementKind::Row, ElementKind::Cell, index)
    }

    fn delete_cell(&mut self, row: NodeId, index: usize) -> Result<()> {
        self.delete_child_at(row, ElementKind::Row, index)
    }

    fn cells(&self, row: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.expect_kind(row, ElementKind::Row)?.children.clone())
    }

    fn value(&self, input: NodeId) -> Result<String> {
        Ok(self.expect_kind(input, ElementKind::TextInput)?.value.clone())
    }

    fn set_value(&mut self, input: NodeId, value: &str) -> Result<()> {
        self.expect_kind(input, ElementKind::TextInput)?;
        self.nodes[input].value = value.to_string();
        Ok(())
    }

    fn text_content(&self, node: NodeId) -> Result<String> {
        let mut out = String::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let data = self.get(id)?;
            out.push_str(&data.text);
            stack.extend(data.children.iter().rev());
        }
        Ok(out)
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()> {
        let children = std::mem::take(&mut self.get_mut(node)?.children);
        for child in children {
            self.nodes[child].parent = None;
            self.destroy_subtree(child);
        }
        self.nodes[node].text = text.to_string();
        Ok(())
    }
}
