//! Minimal mutable XML tree on top of quick-xml.
//!
//! Start tags are kept as read (attributes and namespace declarations
//! included), so untouched elements serialize back unchanged. Whitespace-only
//! text is dropped and the output is re-indented.

use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

use crate::core::TranzitError;

fn parse_err(e: impl std::fmt::Display) -> TranzitError {
    TranzitError::Template(format!("failed to parse template XML: {e}"))
}

fn xml_io(e: std::io::Error) -> TranzitError {
    TranzitError::Xml(format!("XML write error: {e}"))
}

/// Child content of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Unescaped character data.
    Text(String),
    /// Comments, CDATA sections and processing instructions, passed through.
    Other(Event<'static>),
}

/// An element with its original start tag and its children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    start: BytesStart<'static>,
    children: Vec<Node>,
}

impl Element {
    /// A new element without attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            start: BytesStart::new(name.clone()),
            name,
            children: Vec::new(),
        }
    }

    fn from_start(start: BytesStart<'_>) -> Result<Self, TranzitError> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(parse_err)?
            .to_string();
        Ok(Self {
            name,
            start: start.into_owned(),
            children: Vec::new(),
        })
    }

    /// Qualified name, prefix included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// Unescaped value of an attribute, by qualified name.
    pub fn attribute(&self, key: &str) -> Option<String> {
        self.start
            .try_get_attribute(key)
            .ok()
            .flatten()
            .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Child elements with the given local name.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children().filter(move |e| e.local_name() == local)
    }

    /// First child element with the given local name.
    pub fn child(&self, local: &str) -> Option<&Element> {
        self.children().find(|e| e.local_name() == local)
    }

    pub fn child_mut(&mut self, local: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(e) if e.local_name() == local => Some(e),
            _ => None,
        })
    }

    /// Follow a path of child names, taking the first match at each step.
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |el, name| el.child(name))
    }

    pub fn find_mut(&mut self, path: &[&str]) -> Option<&mut Element> {
        path.iter().try_fold(self, |el, name| el.child_mut(name))
    }

    /// Concatenated text content of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replace all content with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Set the text of the element at `path`, if it exists. Returns whether it did.
    pub fn set_text_at(&mut self, path: &[&str], text: &str) -> bool {
        match self.find_mut(path) {
            Some(el) => {
                el.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Remove every child element with the given local name. Returns how many were removed.
    pub fn remove_children(&mut self, local: &str) -> usize {
        let before = self.children.len();
        self.children
            .retain(|node| !matches!(node, Node::Element(e) if e.local_name() == local));
        before - self.children.len()
    }

    /// Append a child element after all existing content.
    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), TranzitError> {
        if self.children.is_empty() {
            return writer
                .write_event(Event::Empty(self.start.borrow()))
                .map_err(xml_io);
        }
        writer
            .write_event(Event::Start(self.start.borrow()))
            .map_err(xml_io)?;
        for node in &self.children {
            match node {
                Node::Element(e) => e.write(writer)?,
                Node::Text(t) => writer
                    .write_event(Event::Text(BytesText::new(t)))
                    .map_err(xml_io)?,
                Node::Other(event) => writer.write_event(event.clone()).map_err(xml_io)?,
            }
        }
        writer
            .write_event(Event::End(self.start.to_end()))
            .map_err(xml_io)
    }
}

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Doctype, comments and processing instructions before the root.
    prolog: Vec<Event<'static>>,
    root: Element,
    epilog: Vec<Event<'static>>,
}

impl Document {
    /// Parse a document. The XML declaration is not kept; output always
    /// declares UTF-8.
    pub fn parse(xml: &str) -> Result<Self, TranzitError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut prolog = Vec::new();
        let mut epilog = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                parse_err(format!("{e} at byte {}", reader.buffer_position()))
            })?;
            match event {
                Event::Start(e) => stack.push(Element::from_start(e)?),
                Event::Empty(e) => {
                    let el = Element::from_start(e)?;
                    attach(&mut stack, &mut root, el)?;
                }
                Event::End(_) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| parse_err("unexpected closing tag"))?;
                    attach(&mut stack, &mut root, el)?;
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(parse_err)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Text(text.into_owned())),
                        None => return Err(parse_err("text outside the root element")),
                    }
                }
                Event::Decl(_) => {}
                Event::Eof => break,
                other => {
                    let other = other.into_owned();
                    match (stack.last_mut(), &root) {
                        (Some(parent), _) => parent.children.push(Node::Other(other)),
                        (None, None) => prolog.push(other),
                        (None, Some(_)) => epilog.push(other),
                    }
                }
            }
        }

        if let Some(open) = stack.last() {
            return Err(parse_err(format!("element <{}> is not closed", open.name)));
        }
        let root = root.ok_or_else(|| parse_err("document has no root element"))?;
        Ok(Self {
            prolog,
            root,
            epilog,
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Serialize as indented UTF-8 without byte-order mark.
    pub fn write_to<W: Write>(&self, out: W) -> Result<(), TranzitError> {
        let mut writer = Writer::new_with_indent(out, b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        for event in &self.prolog {
            writer.write_event(event.clone()).map_err(xml_io)?;
        }
        self.root.write(&mut writer)?;
        for event in &self.epilog {
            writer.write_event(event.clone()).map_err(xml_io)?;
        }
        writer.get_mut().write_all(b"\n").map_err(xml_io)
    }

    pub fn to_xml_string(&self) -> Result<String, TranzitError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(|e| TranzitError::Xml(format!("XML UTF-8 error: {e}")))
    }
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), TranzitError> {
    match stack.last_mut() {
        Some(parent) => parent.push(el),
        None if root.is_none() => *root = Some(el),
        None => return Err(parse_err("more than one root element")),
    }
    Ok(())
}
