//! The assembled document and its XML text form.
//!
//! A [`Document`] is a root element with ordered attributes and ordered
//! text-only children. It is written with `quick-xml`, one tab per level:
//!
//! ```text
//! <BasicZmanim date="2024-03-20" type="basic" ...>
//! 	<Sunrise>2024-03-20T06:57:03-04:00</Sunrise>
//! 	<TemporalHour>PT1H0.571S</TemporalHour>
//! </BasicZmanim>
//! ```
//!
//! Attribute values and child text are escaped by the writer. Element names
//! are written as given and must already be valid XML names.

use crate::errors::{CatalogError, CatalogResult};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root_tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<(String, String)>,
}

impl Document {
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            root_tag: root_tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    pub fn push_child(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.children.push((label.into(), text.into()));
    }

    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[(String, String)] {
        &self.children
    }

    /// Renders the document as XML text, without a declaration.
    pub fn to_xml(&self) -> CatalogResult<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b'\t', 1);
        self.write_to(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }

    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> CatalogResult<()> {
        let mut root = BytesStart::new(self.root_tag.as_str());
        for (name, value) in &self.attributes {
            root.push_attribute((name.as_str(), value.as_str()));
        }
        writer
            .write_event(Event::Start(root))
            .map_err(|e| CatalogError::Xml(e.to_string()))?;

        for (label, text) in &self.children {
            writer
                .write_event(Event::Start(BytesStart::new(label.as_str())))
                .map_err(|e| CatalogError::Xml(e.to_string()))?;
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| CatalogError::Xml(e.to_string()))?;
            writer
                .write_event(Event::End(BytesEnd::new(label.as_str())))
                .map_err(|e| CatalogError::Xml(e.to_string()))?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(self.root_tag.as_str())))
            .map_err(|e| CatalogError::Xml(e.to_string()))?;
        Ok(())
    }
}
