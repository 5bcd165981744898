//! A minimal XML element tree for outgoing stanzas.
//!
//! The augmenter treats a stanza as a mutable sink: it checks for a
//! `body` child and appends a mood element. This model carries exactly
//! what that needs (name, optional `xmlns`, character data, children),
//! plus `quick-xml` based encoding and decoding so produced fragments
//! can be verified and round-tripped in tests and host fixtures.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::errors::MoodError;

/// One XML element: a stanza root or any fragment of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element name (e.g. `message`, `mood`, `happy`).
    pub name: String,
    /// `xmlns` attribute, when namespace-qualified.
    pub namespace: Option<String>,
    /// Character data directly under this element.
    pub text: Option<String>,
    /// Child elements, in insertion order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no namespace, text, or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder-style namespace setter.
    pub fn with_namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = Some(ns.into());
        self
    }

    /// Builder-style text setter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element, after any existing children.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// `true` if a direct child with the given name exists.
    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    // -----------------------------------------------------------------------
    // Encoding / decoding
    // -----------------------------------------------------------------------

    /// Encode this element (and its subtree) as an XML string.
    pub fn to_xml(&self) -> Result<String, MoodError> {
        let mut writer = Writer::new(Vec::new());
        self.write_into(&mut writer)?;
        let bytes = writer.into_inner();
        // The writer only ever receives valid UTF-8.
        Ok(String::from_utf8(bytes).unwrap_or_default())
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), MoodError> {
        let mut start = BytesStart::new(self.name.as_str());
        if let Some(ns) = &self.namespace {
            start.push_attribute(("xmlns", ns.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(quick_xml::Error::from)?;
            return Ok(());
        }

        writer
            .write_event(Event::Start(start))
            .map_err(quick_xml::Error::from)?;
        if let Some(text) = &self.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(quick_xml::Error::from)?;
        }
        for child in &self.children {
            child.write_into(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(quick_xml::Error::from)?;
        Ok(())
    }

    /// Decode an XML string into an element tree.
    ///
    /// Only the structure this model carries is retained: element names,
    /// the `xmlns` attribute, character data, and child order.
    pub fn parse(xml: &str) -> Result<Element, MoodError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event().map_err(MoodError::Xml)? {
                Event::Start(start) => {
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(text) => {
                    let data = text.unescape().map_err(MoodError::Xml)?;
                    if let Some(current) = stack.last_mut() {
                        match &mut current.text {
                            Some(existing) => existing.push_str(&data),
                            None => current.text = Some(data.into_owned()),
                        }
                    }
                }
                Event::End(_) => {
                    let element = stack.pop().unwrap_or_else(|| Element::new(""));
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Eof => {
                    return Err(MoodError::Xml(quick_xml::Error::from(
                        std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "no root element",
                        ),
                    )));
                }
                _ => {}
            }
        }
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, MoodError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == b"xmlns" {
            let value = attr.unescape_value().map_err(MoodError::Xml)?;
            element.namespace = Some(value.into_owned());
        }
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut stanza = Element::new("message");
        stanza.append_child(Element::new("body").with_text("hi"));
        stanza.append_child(Element::new("mood"));

        assert_eq!(stanza.children[0].name, "body");
        assert_eq!(stanza.children[1].name, "mood");
    }

    #[test]
    fn test_child_lookup() {
        let mut stanza = Element::new("message");
        assert!(!stanza.has_child("body"));
        stanza.append_child(Element::new("body").with_text("hi"));
        assert!(stanza.has_child("body"));
        assert_eq!(stanza.child("body").unwrap().text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_to_xml_empty_element() {
        let element = Element::new("happy");
        assert_eq!(element.to_xml().unwrap(), "<happy/>");
    }

    #[test]
    fn test_to_xml_with_namespace_and_children() {
        let mut mood = Element::new("mood")
            .with_namespace("http://jabber.org/protocol/mood");
        mood.append_child(Element::new("happy"));
        mood.append_child(Element::new("text").with_text("feeling great"));

        assert_eq!(
            mood.to_xml().unwrap(),
            "<mood xmlns=\"http://jabber.org/protocol/mood\">\
             <happy/><text>feeling great</text></mood>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let element = Element::new("text").with_text("a < b & c");
        let xml = element.to_xml().unwrap();
        assert_eq!(xml, "<text>a &lt; b &amp; c</text>");
        assert_eq!(Element::parse(&xml).unwrap().text.as_deref(), Some("a < b & c"));
    }

    #[test]
    fn test_parse_round_trip() {
        let mut mood = Element::new("mood")
            .with_namespace("http://jabber.org/protocol/mood");
        mood.append_child(Element::new("worried"));
        mood.append_child(Element::new("text").with_text("deadline"));

        let xml = mood.to_xml().unwrap();
        let parsed = Element::parse(&xml).unwrap();
        assert_eq!(parsed, mood);
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(Element::parse("").is_err());
    }
}
