use std::fs;
use std::path::PathBuf;

use roxmltree::{Document, Node};
use sg_api::{BuildPlugin, BuildPlugins};
use sg_core::ScaffoldError;
use sg_parser::parse_xml_document;

use crate::{map_cli_pom_invalid, map_cli_pom_read, map_cli_pom_write};

pub(crate) const POM_FILE: &str = "pom.xml";
const POM_INDENT: &str = "    ";

/// Build plugins declared under `project/build/plugins` of a Maven POM.
#[derive(Debug, Clone)]
pub(crate) struct PomBuildPlugins {
    path: PathBuf,
}

impl PomBuildPlugins {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<String, ScaffoldError> {
        if !self.path.is_file() {
            return Err(ScaffoldError::new(
                "CLI_POM_NOT_FOUND",
                format!("Build file does not exist: {}", self.path.display()),
            ));
        }
        fs::read_to_string(&self.path).map_err(map_cli_pom_read)
    }
}

impl BuildPlugins for PomBuildPlugins {
    fn installed_plugins(&self) -> Result<Vec<BuildPlugin>, ScaffoldError> {
        let document = parse_xml_document(&self.read()?)?;
        let Some(plugins) = document.root.find_path(&["build", "plugins"]) else {
            return Ok(Vec::new());
        };

        Ok(plugins
            .element_children()
            .filter(|child| child.name == "plugin")
            .filter_map(|child| BuildPlugin::from_element(child).ok())
            .collect())
    }

    fn add_plugin(&mut self, plugin: &BuildPlugin) -> Result<(), ScaffoldError> {
        let updated = insert_plugin(&self.read()?, &plugin.snippet)?;
        fs::write(&self.path, updated).map_err(map_cli_pom_write)
    }
}

/// Splices `snippet` into the POM text before `</plugins>`, creating the
/// `<build>` and `<plugins>` containers when they are absent. Everything else
/// in the file is kept byte for byte.
pub(crate) fn insert_plugin(source: &str, snippet: &str) -> Result<String, ScaffoldError> {
    let document = Document::parse(source).map_err(map_cli_pom_invalid)?;
    let project = document.root_element();
    if project.tag_name().name() != "project" {
        return Err(ScaffoldError::new(
            "CLI_POM_ROOT_INVALID",
            format!(
                "Expected <project> as the build file root, found <{}>.",
                project.tag_name().name()
            ),
        ));
    }

    let build = child_element(project, "build");
    let plugins = build.and_then(|build| child_element(build, "plugins"));
    let updated = match (build, plugins) {
        (_, Some(plugins)) => insert_before_close(source, plugins, &indent_block(snippet, 3), 2),
        (Some(build), None) => insert_before_close(
            source,
            build,
            &wrap("plugins", &indent_block(snippet, 3), 2),
            1,
        ),
        (None, _) => insert_before_close(
            source,
            project,
            &wrap(
                "build",
                &wrap("plugins", &indent_block(snippet, 3), 2),
                1,
            ),
            0,
        ),
    };
    Ok(updated)
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

fn insert_before_close(source: &str, node: Node<'_, '_>, fragment: &str, depth: usize) -> String {
    let range = node.range();
    let element_text = &source[range.clone()];

    if let Some(open) = element_text.strip_suffix("/>") {
        return format!(
            "{}{}>\n{}{}</{}>{}",
            &source[..range.start],
            open.trim_end(),
            fragment,
            POM_INDENT.repeat(depth),
            node.tag_name().name(),
            &source[range.end..]
        );
    }

    let close_start = range.start + element_text.rfind("</").unwrap_or(element_text.len());
    let line_start = source[..close_start].rfind('\n').map_or(0, |index| index + 1);
    if source[line_start..close_start].trim().is_empty() {
        format!("{}{}{}", &source[..line_start], fragment, &source[line_start..])
    } else {
        format!("{}\n{}{}", &source[..close_start], fragment, &source[close_start..])
    }
}

fn indent_block(block: &str, depth: usize) -> String {
    let prefix = POM_INDENT.repeat(depth);
    block
        .lines()
        .map(|line| format!("{}{}\n", prefix, line))
        .collect()
}

fn wrap(name: &str, inner: &str, depth: usize) -> String {
    let prefix = POM_INDENT.repeat(depth);
    format!("{prefix}<{name}>\n{inner}{prefix}</{name}>\n")
}

#[cfg(test)]
mod pom_tests {
    use super::*;

    const SNIPPET: &str = "<plugin>\n  <artifactId>selenium-maven-plugin</artifactId>\n</plugin>\n";

    #[test]
    fn insert_plugin_appends_to_existing_plugins() {
        let source = "<project>\n    <build>\n        <plugins>\n            <plugin>\n                <artifactId>maven-compiler-plugin</artifactId>\n            </plugin>\n        </plugins>\n    </build>\n</project>\n";
        let updated = insert_plugin(source, SNIPPET).expect("insert");

        assert_eq!(
            updated,
            "<project>\n    <build>\n        <plugins>\n            <plugin>\n                <artifactId>maven-compiler-plugin</artifactId>\n            </plugin>\n            <plugin>\n              <artifactId>selenium-maven-plugin</artifactId>\n            </plugin>\n        </plugins>\n    </build>\n</project>\n"
        );
    }

    #[test]
    fn insert_plugin_creates_build_section() {
        let source = "<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n    <artifactId>petclinic</artifactId>\n</project>\n";
        let updated = insert_plugin(source, SNIPPET).expect("insert");

        let document = parse_xml_document(&updated).expect("updated pom parses");
        let plugins = document
            .root
            .find_path(&["build", "plugins"])
            .expect("plugins created");
        assert_eq!(plugins.element_children().count(), 1);
        assert!(updated.starts_with("<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n    <artifactId>petclinic</artifactId>\n    <build>\n"));
    }

    #[test]
    fn insert_plugin_expands_self_closing_plugins() {
        let source = "<project>\n    <build>\n        <plugins/>\n    </build>\n</project>";
        let updated = insert_plugin(source, SNIPPET).expect("insert");
        let document = parse_xml_document(&updated).expect("updated pom parses");
        let plugin = document
            .root
            .find_path(&["build", "plugins", "plugin", "artifactId"])
            .expect("plugin inserted");
        assert_eq!(plugin.text_content(), "selenium-maven-plugin");
    }

    #[test]
    fn insert_plugin_rejects_foreign_root() {
        let error = insert_plugin("<settings/>", SNIPPET).expect_err("root should be rejected");
        assert_eq!(error.code, "CLI_POM_ROOT_INVALID");

        let error = insert_plugin("<project>", SNIPPET).expect_err("xml should be rejected");
        assert_eq!(error.code, "CLI_POM_INVALID");
    }
}
