//! The document collaborator trait.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::node::{ElementKind, NodeId};

/// The tree operations a grid needs from its environment.
///
/// Mirrors the subset of the HTML DOM used to build and edit a table:
/// element creation, id lookup, child management, row/cell insertion and
/// access to input values and text content.
pub trait Document {
    /// Creates a detached element of the given kind.
    fn create_element(&mut self, kind: ElementKind) -> NodeId;

    /// Finds a connected element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Sets the `id` attribute of an element.
    fn set_element_id(&mut self, node: NodeId, id: &str) -> Result<()>;

    /// Returns the kind of a node.
    fn kind(&self, node: NodeId) -> Result<ElementKind>;

    /// Returns the parent of a node, if it is attached.
    fn parent(&self, node: NodeId) -> Result<Option<NodeId>>;

    /// Returns the children of a node in order.
    fn children(&self, node: NodeId) -> Result<Vec<NodeId>>;

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Detaches `child` from `parent` without destroying it.
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Detaches a node and destroys it together with its subtree.
    fn remove_node(&mut self, node: NodeId) -> Result<()>;

    /// Inserts a new row into a table at `index`, or at the end for `None`.
    fn insert_row(&mut self, table: NodeId, index: Option<usize>) -> Result<NodeId>;

    /// Removes and destroys the row at `index`.
    fn delete_row(&mut self, table: NodeId, index: usize) -> Result<()>;

    /// Returns the rows of a table.
    fn rows(&self, table: NodeId) -> Result<Vec<NodeId>>;

    /// Inserts a new cell into a row at `index`, or at the end for `None`.
    fn insert_cell(&mut self, row: NodeId, index: Option<usize>) -> Result<NodeId>;

    /// Removes and destroys the cell at `index`.
    fn delete_cell(&mut self, row: NodeId, index: usize) -> Result<()>;

    /// Returns the cells of a row.
    fn cells(&self, row: NodeId) -> Result<Vec<NodeId>>;

    /// Returns the current value of a text input.
    fn value(&self, input: NodeId) -> Result<String>;

    /// Sets the current value of a text input.
    fn set_value(&mut self, input: NodeId, value: &str) -> Result<()>;

    /// Returns the concatenated text of a node and its descendants.
    fn text_content(&self, node: NodeId) -> Result<String>;

    /// Replaces the children of a node with the given text.
    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()>;
}

/// A document shared between a grid and the code hosting it.
///
/// The host edits input values through the same handle the grid renders
/// into. Each grid operation holds the lock for its whole duration.
pub struct SharedDocument<D> {
    inner: Arc<RwLock<D>>,
}

impl<D: Document> SharedDocument<D> {
    /// Wrap a document for sharing.
    pub fn new(document: D) -> Self {
        Self {
            inner: Arc::new(RwLock::new(document)),
        }
    }

    /// Lock the document for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, D> {
        self.inner.read()
    }

    /// Lock the document for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, D> {
        self.inner.write()
    }

    /// Run a closure with shared access to the document.
    pub fn with_read<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a closure with exclusive access to the document.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<D> Clone for SharedDocument<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Document + Default> Default for SharedDocument<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D> std::fmt::Debug for SharedDocument<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedDocument")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish()
    }
}
