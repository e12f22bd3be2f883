//! A minimal element tree built from quick-xml events.
//!
//! Project files are small, so the whole document is materialised as a tree
//! of [`Element`]s. Text content is checked for valid entity references and
//! then dropped; only element names, attributes and nesting are kept.

use crate::error::ImportError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One XML element with its attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    /// Returns the value of an attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the first child element, whatever its name.
    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }

    /// Iterates child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// Parses a complete document and returns its root element.
pub(crate) fn parse_document(content: &str) -> Result<Element, ImportError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let element = start_element(e)?;
                stack.push(element);
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| {
                    ImportError::Malformed("closing tag without matching opening tag".to_string())
                })?;
                close_element(element, &mut stack, &mut root)?;
            }
            Ok(Event::Text(ref e)) => {
                if stack.is_empty() {
                    if e.iter().all(|b| b.is_ascii_whitespace()) {
                        continue;
                    }
                    return Err(ImportError::Malformed(
                        "text outside the root element".to_string(),
                    ));
                }
                e.unescape()
                    .map_err(|e| ImportError::Malformed(format!("text content error: {e}")))?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ImportError::Malformed(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ImportError::Malformed(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| ImportError::Malformed("document has no root element".to_string()))
}

fn start_element(e: &BytesStart<'_>) -> Result<Element, ImportError> {
    let name = std::str::from_utf8(e.local_name().as_ref())
        .map_err(|e| ImportError::Malformed(format!("invalid tag name: {e}")))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ImportError::Malformed(format!("attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| ImportError::Malformed(format!("attribute key error: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| ImportError::Malformed(format!("attribute value error: {e}")))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn close_element(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), ImportError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(ImportError::Malformed(format!(
            "unexpected second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}
