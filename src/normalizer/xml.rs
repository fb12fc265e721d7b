//! Minimal attributed XML tree used by the feed normalizer.
//!
//! Stores raw character data (text nodes and CDATA folded together);
//! entity decoding happens at field-extraction time so every value is
//! decoded exactly once.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
    text: String,
}

impl Element {
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Accumulated character data: text nodes plus CDATA sections.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse a document into its root element.
///
/// Element and attribute names are reduced to their local part, so
/// namespace prefixes (`atom:link`, `dc:creator`) never affect lookups.
/// Well-formed input containing no element at all yields `Ok(None)`.
pub fn parse_document(xml: &str) -> Result<Option<Element>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(open_element(&start)),
            Event::Empty(start) => {
                let element = open_element(&start);
                close_element(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    close_element(element, &mut stack, &mut root);
                }
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(&text));
                }
            }
            Event::CData(cdata) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .text
                        .push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(root)
}

fn open_element(start: &BytesStart) -> Element {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let mut attrs = Vec::new();
    for attr in start.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        attrs.push((key, value));
    }

    Element {
        name,
        attrs,
        children: Vec::new(),
        text: String::new(),
    }
}

fn close_element(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_attributes() {
        let root = parse_document(r#"<a x="1"><b y="2">hi</b><b>there</b></a>"#)
            .unwrap()
            .unwrap();

        assert_eq!(root.name, "a");
        assert_eq!(root.attr("x"), Some("1"));
        assert_eq!(root.children_named("b").count(), 2);
        assert_eq!(root.child("b").unwrap().attr("y"), Some("2"));
        assert_eq!(root.child("b").unwrap().text(), "hi");
    }

    #[test]
    fn folds_cdata_into_text() {
        let root = parse_document("<t><![CDATA[Tom & Jerry]]></t>")
            .unwrap()
            .unwrap();
        assert_eq!(root.text(), "Tom & Jerry");
    }

    #[test]
    fn strips_namespace_prefixes() {
        let root = parse_document(r#"<x:outer xmlns:x="u"><x:inner k="v"/></x:outer>"#)
            .unwrap()
            .unwrap();
        assert_eq!(root.name, "outer");
        assert!(root.child("inner").is_some());
    }

    #[test]
    fn elementless_input_has_no_root() {
        assert!(parse_document("just some text").unwrap().is_none());
        assert!(parse_document("").unwrap().is_none());
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        assert!(parse_document("<a><b></a></b>").is_err());
    }
}
