use sg_core::{ScaffoldError, TestCase, TestStep};
use sg_parser::{write_xml_document, XmlDocument, XmlElementNode, XmlNode};

use crate::skeleton::{load_html_skeleton, required_mut, TITLE_PATH, TEST_CASE_TEMPLATE};

const HEADER_CELL_PATH: &[&str] = &["body", "table", "thead", "tr", "td"];
const BODY_PATH: &[&str] = &["body", "table", "tbody"];

pub fn assemble(title: impl Into<String>, steps: Vec<TestStep>) -> TestCase {
    TestCase {
        title: title.into(),
        steps,
    }
}

/// Parsed test-case template; every render starts again from this tree.
#[derive(Debug, Clone)]
pub struct TestCaseSkeleton {
    document: XmlDocument,
}

impl TestCaseSkeleton {
    pub fn from_template(source: &str) -> Result<Self, ScaffoldError> {
        let document = load_html_skeleton(source, &[TITLE_PATH, HEADER_CELL_PATH, BODY_PATH])?;
        Ok(Self { document })
    }

    pub fn bundled() -> Result<Self, ScaffoldError> {
        Self::from_template(TEST_CASE_TEMPLATE)
    }

    pub fn to_document(&self, case: &TestCase) -> Result<XmlDocument, ScaffoldError> {
        let mut document = self.document.clone();
        required_mut(&mut document.root, TITLE_PATH)?.set_text(case.title.as_str());
        required_mut(&mut document.root, HEADER_CELL_PATH)?.set_text(case.title.as_str());

        required_mut(&mut document.root, BODY_PATH)?.children = case
            .steps
            .iter()
            .map(|step| XmlNode::Element(step_row(step)))
            .collect();

        Ok(document)
    }

    pub fn render(&self, case: &TestCase) -> Result<String, ScaffoldError> {
        Ok(write_xml_document(&self.to_document(case)?))
    }
}

fn step_row(step: &TestStep) -> XmlElementNode {
    XmlElementNode::new("tr")
        .with_child(XmlElementNode::new("td").with_text(step.command.name()))
        .with_child(XmlElementNode::new("td").with_text(step.target.as_str()))
        .with_child(XmlElementNode::new("td").with_text(step.value.as_str()))
}
