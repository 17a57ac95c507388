//! XML front end: builds an owned element tree from a quick-xml event stream.
//!
//! The tree keeps exactly what the rest of the pipeline needs per node: tag
//! name, direct text, and ordered children. Attributes are dropped and
//! namespaces are not interpreted.

use crate::error::{RelgraphError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// One element of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name as written in the source.
    pub name: String,
    /// Concatenated direct text content, untrimmed.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }
}

/// Parse a whole document into its root element.
///
/// Any well-formedness error is fatal: extraction never runs over a
/// partially parsed tree.
pub fn parse_document(content: &str) -> Result<Element> {
    let mut reader = Reader::from_str(content);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if root.is_some() && stack.is_empty() {
                    return Err(RelgraphError::Parse(format!(
                        "unexpected second root element <{}>",
                        name
                    )));
                }
                stack.push(Element::new(name));
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let element = Element::new(name);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None if root.is_none() => root = Some(element),
                    None => {
                        return Err(RelgraphError::Parse(format!(
                            "unexpected second root element <{}/>",
                            element.name
                        )));
                    }
                }
            }
            Ok(Event::Text(e)) => {
                // Text outside the root (whitespace around the prolog) is ignored
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(current) = stack.last_mut() {
                    append_reference(current, &e)?;
                }
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| RelgraphError::Parse("unexpected closing tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(RelgraphError::Parse(e.to_string()));
            }
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(RelgraphError::Parse(format!(
            "unclosed element <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| RelgraphError::Parse("document has no root element".to_string()))
}

/// Resolve a general or character reference (`&amp;`, `&#233;`, ...) into text.
fn append_reference(current: &mut Element, raw: &[u8]) -> Result<()> {
    let name = String::from_utf8_lossy(raw).to_string();
    let resolved = match name.as_str() {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => match name.strip_prefix('#') {
            Some(code) => {
                let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                    Some(hex) => u32::from_str_radix(hex, 16),
                    None => code.parse::<u32>(),
                }
                .map_err(|_| {
                    RelgraphError::Parse(format!("invalid character reference &{};", name))
                })?;
                Some(char::from_u32(value).ok_or_else(|| {
                    RelgraphError::Parse(format!("invalid character reference &{};", name))
                })?)
            }
            None => None,
        },
    };
    match resolved {
        Some(ch) => current.text.push(ch),
        // Unknown named entity: keep it verbatim rather than losing the text
        None => {
            current.text.push('&');
            current.text.push_str(&name);
            current.text.push(';');
        }
    }
    Ok(())
}
