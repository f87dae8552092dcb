//! Document tree for FormGrid.
//!
//! This crate is the collaborator a grid renders into: a tree of elements
//! (tables, rows, cells, text inputs, paragraphs) addressed by stable
//! [`NodeId`]s.
//!
//! - **[`Document`]**: the operations a grid needs from its environment
//! - **[`MemoryDocument`]**: an arena-backed implementation with HTML output
//! - **[`SharedDocument`]**: a lockable handle shared between a grid and its host
//!
//! # Example
//!
//! ```
//! use formgrid_dom::{Document, ElementKind, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let parent = doc.create_container("parent");
//!
//! let table = doc.create_element(ElementKind::Table);
//! let row = doc.insert_row(table, None).unwrap();
//! let cell = doc.insert_cell(row, None).unwrap();
//! let input = doc.create_element(ElementKind::TextInput);
//! doc.append_child(cell, input).unwrap();
//! doc.set_value(input, "42").unwrap();
//! doc.append_child(parent, table).unwrap();
//!
//! assert_eq!(
//!     doc.to_html(table).unwrap(),
//!     r#"<table><tr><td><input type="text" value="42"/></td></tr></table>"#
//! );
//! ```

mod document;
mod error;
mod html;
pub mod logging;
mod memory;
mod node;

pub use document::{Document, SharedDocument};
pub use error::{DomError, Result};
pub use html::{escape_attribute, escape_text};
pub use memory::MemoryDocument;
pub use node::{ElementKind, NodeId};
