use sg_core::ScaffoldError;
use sg_parser::{parse_xml_document, write_xml_element, XmlElementNode};

use crate::{BuildPlugin, BuildPlugins};

pub const PLUGIN_CONFIGURATION: &str = include_str!("../templates/configuration.xml");
pub const SELENIUM_PLUGIN_ARTIFACT_ID: &str = "selenium-maven-plugin";

impl BuildPlugin {
    pub fn from_element(element: &XmlElementNode) -> Result<Self, ScaffoldError> {
        let child_text = |name: &str| {
            element
                .first_child(name)
                .map(|child| child.text_content().trim().to_string())
        };
        let Some(artifact_id) = child_text("artifactId").filter(|value| !value.is_empty()) else {
            return Err(ScaffoldError::new(
                "PLUGIN_ARTIFACT_MISSING",
                "Build plugin descriptor has no <artifactId>.",
            ));
        };

        Ok(Self {
            group_id: child_text("groupId").unwrap_or_else(|| "org.apache.maven.plugins".to_string()),
            artifact_id,
            version: child_text("version"),
            snippet: write_xml_element(element, 0),
        })
    }
}

/// Reads the Selenium plugin descriptor bundled under `/configuration/selenium/plugin`.
pub fn selenium_plugin() -> Result<BuildPlugin, ScaffoldError> {
    let document = parse_xml_document(PLUGIN_CONFIGURATION)?;
    let Some(plugin) = document.root.find_path(&["selenium", "plugin"]) else {
        return Err(ScaffoldError::new(
            "PLUGIN_CONFIGURATION_MISSING",
            "Plugin configuration has no /configuration/selenium/plugin element.",
        ));
    };
    BuildPlugin::from_element(plugin)
}

/// Adds `plugin` unless one with the same artifact id is installed.
/// Returns whether the store was changed.
pub fn install_build_plugin(
    store: &mut dyn BuildPlugins,
    plugin: &BuildPlugin,
) -> Result<bool, ScaffoldError> {
    let installed = store.installed_plugins()?;
    if installed
        .iter()
        .any(|existing| existing.artifact_id == plugin.artifact_id)
    {
        return Ok(false);
    }

    store.add_plugin(plugin)?;
    Ok(true)
}
