//! Minimal UXML element tree
//!
//! Only what name extraction needs is kept: the local tag name, the `name`
//! attribute and the children in document order.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Tags that declare things for the tree but are never cloned into it
const NON_VISUAL_TAGS: &[&str] = &["Template", "Style"];

/// One element of a UXML document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    /// Tag name without namespace prefix (`ui:Button` -> `Button`)
    pub tag: String,
    /// Value of the `name` attribute, if present
    pub name: Option<String>,
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: None,
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this element ends up as a visual element when the document is cloned
    pub fn is_visual(&self) -> bool {
        !NON_VISUAL_TAGS.contains(&self.tag.as_str())
    }
}

/// Parse UXML text into an element tree.
///
/// The returned node is a synthetic, unnamed document root whose children are
/// the top level elements (normally a single `UXML` element). Parsing is
/// lenient: on malformed input the elements read so far are kept and a
/// warning is logged.
pub fn parse_markup(content: &str) -> ElementNode {
    let mut reader = Reader::from_str(content);
    let mut stack = vec![ElementNode::default()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(element_from_tag(e)),
            Ok(Event::Empty(ref e)) => attach_to_parent(&mut stack, element_from_tag(e)),
            Ok(Event::End(_)) => {
                if stack.len() > 1 {
                    if let Some(element) = stack.pop() {
                        attach_to_parent(&mut stack, element);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!(
                    "UXML parsing stopped at byte {}, keeping elements read so far: {}",
                    reader.error_position(),
                    e
                );
                break;
            }
        }
    }

    // Close elements left open by truncated or malformed input
    while stack.len() > 1 {
        if let Some(element) = stack.pop() {
            attach_to_parent(&mut stack, element);
        }
    }

    stack.pop().unwrap_or_default()
}

fn attach_to_parent(stack: &mut [ElementNode], element: ElementNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    }
}

fn element_from_tag(tag: &BytesStart) -> ElementNode {
    let mut element = ElementNode::new(String::from_utf8_lossy(tag.local_name().as_ref()));

    for attr in tag.attributes() {
        match attr {
            Ok(attr) => {
                if attr.key.as_ref() == b"name" {
                    match std::str::from_utf8(&attr.value) {
                        Ok(raw) => {
                            let value = quick_xml::escape::unescape(raw)
                                .map(|v| v.into_owned())
                                .unwrap_or_else(|_| raw.to_string());
                            element.name = Some(value);
                            break;
                        }
                        Err(_) => continue,
                    }
                }
            }
            Err(e) => {
                log::debug!("Skipping malformed attribute on <{}>: {}", element.tag, e);
                continue;
            }
        }
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let content = r#"<?xml version="1.0" encoding="utf-8"?>
<ui:UXML xmlns:ui="UnityEngine.UIElements" editor-extension-mode="False">
    <ui:VisualElement name="root">
        <ui:Label text="Title" name="title-label" />
        <ui:Button name="play-button" text="Play" />
    </ui:VisualElement>
</ui:UXML>"#;

        let document = parse_markup(content);
        assert_eq!(document.tag, "");
        assert_eq!(document.name, None);
        assert_eq!(document.children.len(), 1);

        let uxml = &document.children[0];
        assert_eq!(uxml.tag, "UXML");
        let root = &uxml.children[0];
        assert_eq!(root.tag, "VisualElement");
        assert_eq!(root.name.as_deref(), Some("root"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tag, "Label");
        assert_eq!(root.children[0].name.as_deref(), Some("title-label"));
        assert_eq!(root.children[1].name.as_deref(), Some("play-button"));
    }

    #[test]
    fn test_name_attribute_is_unescaped() {
        let document = parse_markup(r#"<UXML><Label name="a&amp;b" /></UXML>"#);
        assert_eq!(document.children[0].children[0].name.as_deref(), Some("a&b"));
    }

    #[test]
    fn test_malformed_input_keeps_what_was_read() {
        let content = r#"<ui:UXML xmlns:ui="UnityEngine.UIElements">
    <ui:VisualElement name="first" />
    <ui:VisualElement name="second">
        <ui:Label name="inner" />
    </ui:Button>
    <ui:Label name="never-reached" />"#;

        let document = parse_markup(content);
        let uxml = &document.children[0];
        assert_eq!(uxml.children[0].name.as_deref(), Some("first"));
        assert_eq!(uxml.children[1].name.as_deref(), Some("second"));
        assert_eq!(uxml.children[1].children[0].name.as_deref(), Some("inner"));
    }

    #[test]
    fn test_empty_input() {
        let document = parse_markup("");
        assert!(document.children.is_empty());
    }

    #[test]
    fn test_template_and_style_are_not_visual() {
        assert!(!ElementNode::new("Template").is_visual());
        assert!(!ElementNode::new("Style").is_visual());
        assert!(ElementNode::new("Instance").is_visual());
        assert!(ElementNode::new("Button").is_visual());
    }
}
