mod writer;
mod xml;

pub use writer::{write_xml_document, write_xml_element};
pub use xml::{parse_xml_document, XmlDocument, XmlElementNode, XmlNode};
