//! Output document structure
//!
//! The document is an element tree with one `objectpool` root and one child
//! per decoded object. It is built in a single pass after naming and then
//! handed to the XML writer unchanged.

use crate::error::Result;
use crate::io::reader::ImportConfiguration;
use crate::io::writer::xml_writer;
use std::io::Write;

/// Element of the output tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    /// Attributes in output order
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of `set_attribute`
    pub fn with_attribute(mut self, key: &str, value: impl ToString) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attribute(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attribute(key).is_some()
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// `include_object` children playing `role`
    pub fn includes_with_role<'a>(
        &'a self,
        role: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children_named("include_object")
            .filter(move |child| child.attribute("role") == Some(role))
    }
}

/// The converted object pool
#[derive(Debug, Clone, PartialEq)]
pub struct PoolDocument {
    root: Element,
}

impl PoolDocument {
    /// Empty pool carrying the global parameters of `config`
    pub fn new(config: &ImportConfiguration) -> Self {
        let root = Element::new("objectpool")
            .with_attribute("dimension", config.dimension)
            .with_attribute("fix_bitmap_path", &config.fix_bitmap_path)
            .with_attribute("std_bitmap_path", &config.std_bitmap_path)
            .with_attribute("sk_width", config.sk_width)
            .with_attribute("sk_height", config.sk_height);
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn push_object(&mut self, element: Element) {
        self.root.push(element);
    }

    pub fn objects(&self) -> &[Element] {
        &self.root.children
    }

    /// Object element by assigned name
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.root
            .children
            .iter()
            .find(|element| element.attribute("name") == Some(name))
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        xml_writer::write_document(self, writer)
    }

    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
