use sg_core::{ScaffoldError, SuiteEntry, SuiteIndex};
use sg_parser::{write_xml_document, XmlDocument, XmlElementNode, XmlNode};

use crate::skeleton::{load_html_skeleton, required_mut, SUITE_TEMPLATE, TITLE_PATH};

const TABLE_PATH: &[&str] = &["body", "table"];

/// Folds `entry` into a copy of `existing` (or a blank index) under `suite_title`.
///
/// Entries are never deduplicated: merging the same entry twice yields two rows.
pub fn merge(existing: Option<&SuiteIndex>, entry: SuiteEntry, suite_title: &str) -> SuiteIndex {
    let mut index = existing.cloned().unwrap_or_default();
    index.title = suite_title.to_string();
    index.entries.push(entry);
    index
}

/// A suite document and the index of test links found in its table.
#[derive(Debug, Clone)]
pub struct SuiteDocument {
    skeleton: XmlDocument,
    pub index: SuiteIndex,
}

impl SuiteDocument {
    pub fn parse(source: &str) -> Result<Self, ScaffoldError> {
        let mut skeleton = load_html_skeleton(source, &[TITLE_PATH, TABLE_PATH])?;
        let title = required_mut(&mut skeleton.root, TITLE_PATH)?.text_content();

        let entries = required_mut(&mut skeleton.root, TABLE_PATH)?
            .element_children()
            .filter_map(entry_from_row)
            .collect();

        Ok(Self {
            skeleton,
            index: SuiteIndex {
                title: title.trim().to_string(),
                entries,
            },
        })
    }

    /// The bundled suite template with no entries.
    pub fn blank() -> Result<Self, ScaffoldError> {
        Self::parse(SUITE_TEMPLATE)
    }

    pub fn with_index(self, index: SuiteIndex) -> Self {
        Self {
            skeleton: self.skeleton,
            index,
        }
    }

    pub fn to_document(&self) -> Result<XmlDocument, ScaffoldError> {
        let mut document = self.skeleton.clone();
        required_mut(&mut document.root, TITLE_PATH)?.set_text(self.index.title.as_str());

        // Link rows are rewritten in place; entries beyond them go at the end.
        let table = required_mut(&mut document.root, TABLE_PATH)?;
        let mut entries = self.index.entries.iter();
        let mut children = Vec::with_capacity(table.children.len() + 1);
        for child in std::mem::take(&mut table.children) {
            match child {
                XmlNode::Element(row) if entry_from_row(&row).is_some() => {
                    if let Some(entry) = entries.next() {
                        children.push(XmlNode::Element(entry_row(entry)));
                    }
                }
                other => children.push(other),
            }
        }
        children.extend(entries.map(|entry| XmlNode::Element(entry_row(entry))));
        table.children = children;

        Ok(document)
    }

    pub fn render(&self) -> Result<String, ScaffoldError> {
        Ok(write_xml_document(&self.to_document()?))
    }
}

fn entry_row(entry: &SuiteEntry) -> XmlElementNode {
    XmlElementNode::new("tr").with_child(
        XmlElementNode::new("td").with_child(
            XmlElementNode::new("a")
                .with_attr("href", entry.href.as_str())
                .with_text(entry.label.as_str()),
        ),
    )
}

fn entry_from_row(row: &XmlElementNode) -> Option<SuiteEntry> {
    if row.name != "tr" {
        return None;
    }
    let link = row.first_child("td")?.first_child("a")?;
    Some(SuiteEntry {
        label: link.text_content(),
        href: link.attr("href")?.to_string(),
    })
}
