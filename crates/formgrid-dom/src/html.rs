//! HTML serialization of a [`MemoryDocument`] subtree.
//!
//! Markup is emitted through a [`quick_xml::Writer`], so void elements are
//! written in their self-closing form (`<input .../>`).

use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::document::Document;
use crate::error::{DomError, Result};
use crate::memory::MemoryDocument;
use crate::node::{ElementKind, NodeId};

/// Escape text for use between tags.
pub fn escape_text(text: &str) -> String {
    partial_escape(text).into_owned()
}

/// Escape text for use inside a quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    escape(value).into_owned()
}

/// Render the subtree rooted at `node` to a string.
pub(crate) fn render(doc: &MemoryDocument, node: NodeId) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(doc, node, &mut writer)?;
    String::from_utf8(writer.into_inner()).map_err(render_error)
}

fn write_element<W: Write>(doc: &MemoryDocument, node: NodeId, writer: &mut Writer<W>) -> Result<()> {
    let kind = doc.kind(node)?;
    let tag = kind.tag_name();

    let mut start = BytesStart::new(tag);
    if let Some(id) = doc.element_id(node)? {
        start.push_attribute(("id", id));
    }
    if kind == ElementKind::TextInput {
        start.push_attribute(("type", "text"));
        start.push_attribute(("value", doc.own_value(node)?));
    }

    if kind.is_void() {
        return writer.write_event(Event::Empty(start)).map_err(render_error);
    }
    writer.write_event(Event::Start(start)).map_err(render_error)?;

    let text = doc.own_text(node)?;
    if !text.is_empty() {
        let escaped = BytesText::from_escaped(partial_escape(text));
        writer.write_event(Event::Text(escaped)).map_err(render_error)?;
    }
    for &child in doc.child_slice(node)? {
        write_element(doc, child, writer)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(render_error)
}

fn render_error(e: impl std::fmt::Display) -> DomError {
    DomError::Render(e.to_string())
}
