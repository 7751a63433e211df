use crate::{XmlDocument, XmlElementNode, XmlNode};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const INDENT: &str = "  ";

/// Serializes a document with a fixed declaration and two-space indentation.
/// Elements holding only text stay on one line so cell values survive verbatim.
pub fn write_xml_document(document: &XmlDocument) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    if let Some(doctype) = &document.doctype {
        out.push_str(doctype);
        out.push('\n');
    }
    write_element(&document.root, 0, &mut out);
    out
}

/// Serializes a single element as a fragment, without declaration.
pub fn write_xml_element(node: &XmlElementNode, depth: usize) -> String {
    let mut out = String::new();
    write_element(node, depth, &mut out);
    out
}

fn write_element(node: &XmlElementNode, depth: usize, out: &mut String) {
    push_indent(depth, out);
    out.push('<');
    out.push_str(&node.name);
    for (name, value) in &node.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    if node.children.is_empty() {
        out.push_str("/>\n");
        return;
    }
    out.push('>');

    let inline = node
        .children
        .iter()
        .all(|child| matches!(child, XmlNode::Text(_)));
    if inline {
        for child in &node.children {
            if let XmlNode::Text(value) = child {
                out.push_str(&escape_text(value));
            }
        }
    } else {
        out.push('\n');
        for child in &node.children {
            match child {
                XmlNode::Element(element) => write_element(element, depth + 1, out),
                XmlNode::Text(value) => {
                    push_indent(depth + 1, out);
                    out.push_str(&escape_text(value.trim()));
                    out.push('\n');
                }
            }
        }
        push_indent(depth, out);
    }

    out.push_str("</");
    out.push_str(&node.name);
    out.push_str(">\n");
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod writer_tests {
    use super::*;
    use crate::parse_xml_document;

    #[test]
    fn write_xml_document_indents_nested_elements() {
        let document = XmlDocument {
            doctype: None,
            root: XmlElementNode::new("tr")
                .with_child(XmlElementNode::new("td").with_text("open"))
                .with_child(XmlElementNode::new("td").with_text(" ")),
        };

        assert_eq!(
            write_xml_document(&document),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
<tr>\n  <td>open</td>\n  <td> </td>\n</tr>\n"
        );
    }

    #[test]
    fn write_xml_document_escapes_text_and_attributes() {
        let document = XmlDocument {
            doctype: Some("<!DOCTYPE html>".to_string()),
            root: XmlElementNode::new("a")
                .with_attr("href", "x?a=1&b=\"2\"")
                .with_text("//input[@id = 'proceed'] < 3"),
        };

        let written = write_xml_document(&document);
        assert!(written.contains("<!DOCTYPE html>\n"));
        assert!(written.contains(r#"href="x?a=1&amp;b=&quot;2&quot;""#));
        assert!(written.contains("//input[@id = 'proceed'] &lt; 3"));
    }

    #[test]
    fn written_document_parses_back_to_the_same_tree() {
        let source = r#"<html xmlns="http://www.w3.org/1999/xhtml"><head><title>T &amp; U</title></head><body><table><tbody><tr><td> </td></tr></tbody></table></body></html>"#;
        let parsed = parse_xml_document(source).expect("source should parse");
        let reparsed =
            parse_xml_document(&write_xml_document(&parsed)).expect("output should parse");
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn write_xml_element_indents_fragment_at_depth() {
        let plugin = XmlElementNode::new("plugin")
            .with_child(XmlElementNode::new("artifactId").with_text("selenium-maven-plugin"));
        assert_eq!(
            write_xml_element(&plugin, 1),
            "  <plugin>\n    <artifactId>selenium-maven-plugin</artifactId>\n  </plugin>\n"
        );
    }

    #[test]
    fn empty_elements_self_close() {
        let document = XmlDocument {
            doctype: None,
            root: XmlElementNode::new("meta").with_attr("charset", "UTF-8"),
        };
        assert!(write_xml_document(&document).ends_with("<meta charset=\"UTF-8\"/>\n"));
    }
}
