//! In-memory XML document tree read by generated loaders.
//!
//! Documents are parsed with `quick-xml` into a tree of [`XmlNode`]s. Only
//! element names, nesting and character data are kept; attributes,
//! comments and processing instructions are ignored.

use crate::error::DocumentError;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Element node of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Creates an empty element with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the character data of this element exactly as it appears
    /// in the document, after entity expansion.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the first child element named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns every child element named `name`, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Appends character data.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlNode,
}

impl XmlDocument {
    /// Parses a document from a string.
    ///
    /// # Errors
    /// Returns `DocumentError` if the XML is malformed or does not have
    /// exactly one root element.
    pub fn parse_str(xml: &str) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    stack.push(XmlNode::new(element_name(e)?));
                }
                Event::Empty(ref e) => {
                    let node = XmlNode::new(element_name(e)?);
                    attach(&mut stack, &mut root, node)?;
                }
                Event::End(_) => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node)?;
                    }
                }
                Event::Text(ref t) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = std::str::from_utf8(t)?;
                        current.push_text(&unescape(raw)?);
                    }
                }
                Event::CData(ref c) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(std::str::from_utf8(c)?);
                    }
                }
                Event::GeneralRef(ref r) => {
                    if let Some(current) = stack.last_mut() {
                        let entity = format!("&{};", std::str::from_utf8(r)?);
                        current.push_text(&unescape(&entity)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.pop() {
            return Err(DocumentError::UnclosedElement { name: open.name });
        }

        root.map(|root| Self { root })
            .ok_or(DocumentError::NoRootElement)
    }

    /// Reads and parses a document from a file.
    ///
    /// # Errors
    /// Returns `DocumentError` if the file cannot be read or parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse_str(&xml)
    }

    /// Returns the root element.
    #[must_use]
    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// Returns the root element if it is named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        (self.root.name == name).then_some(&self.root)
    }
}

fn element_name(e: &BytesStart<'_>) -> Result<String, DocumentError> {
    Ok(std::str::from_utf8(e.name().as_ref())?.to_string())
}

fn attach(
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<(), DocumentError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(node);
    } else if root.is_some() {
        return Err(DocumentError::MultipleRoots { name: node.name });
    } else {
        *root = Some(node);
    }
    Ok(())
}
