use sg_core::ScaffoldError;
use sg_parser::{parse_xml_document, XmlDocument, XmlElementNode};

pub const TEST_CASE_TEMPLATE: &str = include_str!("../templates/selenium-template.xhtml");
pub const SUITE_TEMPLATE: &str = include_str!("../templates/selenium-test-suite-template.xhtml");

pub(crate) const TITLE_PATH: &[&str] = &["head", "title"];

/// Parses an XHTML document and checks that every path below `<html>` exists.
pub(crate) fn load_html_skeleton(
    source: &str,
    required_paths: &[&[&str]],
) -> Result<XmlDocument, ScaffoldError> {
    let document = parse_xml_document(source)?;
    if document.root.name != "html" {
        return Err(ScaffoldError::new(
            "TEMPLATE_ROOT_INVALID",
            format!(
                "Expected <html> as the document root, found <{}>.",
                document.root.name
            ),
        ));
    }

    for path in required_paths {
        if document.root.find_path(path).is_none() {
            return Err(missing_element(path));
        }
    }

    Ok(document)
}

pub(crate) fn required_mut<'a>(
    root: &'a mut XmlElementNode,
    path: &[&str],
) -> Result<&'a mut XmlElementNode, ScaffoldError> {
    root.find_path_mut(path).ok_or_else(|| missing_element(path))
}

fn missing_element(path: &[&str]) -> ScaffoldError {
    ScaffoldError::new(
        "TEMPLATE_ELEMENT_MISSING",
        format!("Required element /html/{} not found.", path.join("/")),
    )
}
