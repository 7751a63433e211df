use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use roxmltree::{Document, Node, NodeType, ParsingOptions};
use sg_core::ScaffoldError;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub doctype: Option<String>,
    pub root: XmlElementNode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElementNode),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElementNode {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlNode>,
}

impl XmlElementNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElementNode) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn element_children(&self) -> impl Iterator<Item = &XmlElementNode> {
        self.children.iter().filter_map(|entry| match entry {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    pub fn first_child(&self, name: &str) -> Option<&XmlElementNode> {
        self.element_children().find(|child| child.name == name)
    }

    pub fn first_child_mut(&mut self, name: &str) -> Option<&mut XmlElementNode> {
        self.children.iter_mut().find_map(|entry| match entry {
            XmlNode::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Follows the first matching child for each segment of `path`, e.g.
    /// `["head", "title"]` from an `html` root.
    pub fn find_path(&self, path: &[&str]) -> Option<&XmlElementNode> {
        path.iter()
            .try_fold(self, |current, segment| current.first_child(segment))
    }

    pub fn find_path_mut(&mut self, path: &[&str]) -> Option<&mut XmlElementNode> {
        let mut current = self;
        for segment in path {
            current = current.first_child_mut(segment)?;
        }
        Some(current)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![XmlNode::Text(text.into())];
    }
}

fn collect_text(node: &XmlElementNode, out: &mut String) {
    for child in &node.children {
        match child {
            XmlNode::Text(value) => out.push_str(value),
            XmlNode::Element(element) => collect_text(element, out),
        }
    }
}

pub fn parse_xml_document(source: &str) -> Result<XmlDocument, ScaffoldError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(source, options)
        .map_err(|error| ScaffoldError::new("XML_PARSE_ERROR", error.to_string()))?;

    let Some(root) = document.root().children().find(|node| node.is_element()) else {
        return Err(ScaffoldError::new(
            "XML_PARSE_ERROR",
            "XML document must contain a root element.",
        ));
    };

    Ok(XmlDocument {
        doctype: doctype_regex()
            .find(source)
            .map(|found| found.as_str().to_string()),
        root: parse_element(root),
    })
}

fn parse_element(node: Node<'_, '_>) -> XmlElementNode {
    let mut attributes = BTreeMap::new();
    for namespace in node.namespaces() {
        if namespace.uri() == XML_NAMESPACE || inherits_namespace(node, namespace) {
            continue;
        }
        let key = match namespace.name() {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        };
        attributes.insert(key, namespace.uri().to_string());
    }
    for attribute in node.attributes() {
        let key = match attribute.namespace() {
            Some(XML_NAMESPACE) => format!("xml:{}", attribute.name()),
            Some(uri) => match prefix_for(node, uri) {
                Some(prefix) => format!("{}:{}", prefix, attribute.name()),
                None => attribute.name().to_string(),
            },
            None => attribute.name().to_string(),
        };
        attributes.insert(key, attribute.value().to_string());
    }

    let mut children = Vec::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => children.push(XmlNode::Element(parse_element(child))),
            NodeType::Text => {
                let value = child.text().unwrap_or_default();
                if value.is_empty() {
                    continue;
                }
                children.push(XmlNode::Text(value.to_string()));
            }
            _ => {}
        }
    }

    // Indentation between child elements is layout, not content.
    if children.iter().any(|child| matches!(child, XmlNode::Element(_))) {
        children.retain(|child| match child {
            XmlNode::Text(value) => !value.trim().is_empty(),
            XmlNode::Element(_) => true,
        });
    }

    XmlElementNode {
        name: qualified_name(node),
        attributes,
        children,
    }
}

fn qualified_name(node: Node<'_, '_>) -> String {
    let local = node.tag_name().name();
    match node
        .tag_name()
        .namespace()
        .and_then(|uri| prefix_for(node, uri))
    {
        Some(prefix) => format!("{}:{}", prefix, local),
        None => local.to_string(),
    }
}

fn prefix_for<'input>(node: Node<'_, 'input>, uri: &str) -> Option<&'input str> {
    node.lookup_prefix(uri).filter(|prefix| !prefix.is_empty())
}

fn inherits_namespace(node: Node<'_, '_>, namespace: &roxmltree::Namespace<'_>) -> bool {
    let Some(parent) = node.parent_element() else {
        return false;
    };
    parent
        .namespaces()
        .any(|candidate| candidate.name() == namespace.name() && candidate.uri() == namespace.uri())
}

fn doctype_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?s)<!DOCTYPE\s[^\[>]*(?:\[.*?\])?\s*>").expect("doctype regex")
    })
}
