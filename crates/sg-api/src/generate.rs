use sg_builder::{build_steps_with_embedded_id, SynthesisContext};
use sg_core::{ScaffoldError, SuiteEntry};
use sg_document::{assemble, merge, SuiteDocument, TestCaseSkeleton};
use tracing::{debug, info, warn};

use crate::{
    install_build_plugin, selenium_plugin, Collaborators, ControllerMetadata,
    ControllerResolution, MenuItem, ProjectFiles, ProjectInfo, MVC_FEATURE,
};

pub const SUITE_RELATIVE_PATH: &str = "selenium/test-suite.xhtml";

#[derive(Debug, Clone)]
pub struct GenerateTestOptions {
    pub controller: String,
    pub name: Option<String>,
    pub server_url: String,
    pub context: SynthesisContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTest {
    pub title: String,
    pub test_path: String,
    pub suite_path: String,
    pub step_count: usize,
    pub test_written: bool,
    pub plugin_installed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Generated(GeneratedTest),
    /// The controller does not allow creating instances; nothing was touched.
    Skipped,
}

pub fn is_generation_possible(project: &ProjectInfo) -> bool {
    project.has_feature(MVC_FEATURE)
}

pub fn generate_test(
    collaborators: Collaborators<'_>,
    options: &GenerateTestOptions,
) -> Result<GenerateOutcome, ScaffoldError> {
    let Collaborators {
        metadata,
        files,
        menu,
        plugins,
    } = collaborators;

    let controller = match metadata.resolve_controller(&options.controller)? {
        ControllerResolution::Scaffolded(controller) => controller,
        ControllerResolution::Unknown => {
            return Err(ScaffoldError::new(
                "CONTROLLER_NOT_FOUND",
                format!(
                    "Type details for controller '{}' could not be resolved.",
                    options.controller
                ),
            ));
        }
        ControllerResolution::NotScaffolded => {
            return Err(ScaffoldError::new(
                "CONTROLLER_NOT_SCAFFOLDED",
                format!(
                    "Web controller '{}' does not appear to be an automatic, scaffolded controller.",
                    options.controller
                ),
            ));
        }
    };

    if !controller.allows_create {
        warn!(
            controller = %options.controller,
            "controller does not allow creating new form backing objects; no Selenium test created"
        );
        return Ok(GenerateOutcome::Skipped);
    }

    let project = metadata.project()?;
    let server_url = normalize_server_url(&options.server_url);
    let title = options.name.clone().unwrap_or_else(|| {
        format!(
            "Selenium test for {}",
            controller.controller_type.simple_name()
        )
    });
    let test_path = test_relative_path(&controller);

    let skeleton = TestCaseSkeleton::bundled()?;
    let steps = build_steps_with_embedded_id(
        &format!("{}{}/{}?form", server_url, project.name, controller.path),
        controller.form_backing_type.fully_qualified(),
        &controller.embedded_id_fields,
        &controller.fields,
        &options.context,
    );
    let step_count = steps.len();
    let document = skeleton.render(&assemble(title.as_str(), steps))?;
    let test_written = files.write_if_changed(&test_path, &document)?;
    info!(path = %test_path, steps = step_count, written = test_written, "selenium test case");

    manage_test_suite(files, &project, &test_path, &title, &server_url)?;
    menu.add_menu_item(suite_menu_item())?;

    let plugin_installed = install_build_plugin(plugins, &selenium_plugin()?)?;
    if plugin_installed {
        info!("installed selenium-maven-plugin build plugin");
    } else {
        debug!("selenium-maven-plugin already present");
    }

    Ok(GenerateOutcome::Generated(GeneratedTest {
        title,
        test_path,
        suite_path: SUITE_RELATIVE_PATH.to_string(),
        step_count,
        test_written,
        plugin_installed,
    }))
}

fn manage_test_suite(
    files: &mut dyn ProjectFiles,
    project: &ProjectInfo,
    test_path: &str,
    title: &str,
    server_url: &str,
) -> Result<(), ScaffoldError> {
    let suite = if files.exists(SUITE_RELATIVE_PATH) {
        SuiteDocument::parse(&files.read_to_string(SUITE_RELATIVE_PATH)?)?
    } else {
        SuiteDocument::blank()?
    };

    let entry = SuiteEntry {
        label: title.to_string(),
        href: format!("{}{}/resources/{}", server_url, project.name, test_path),
    };
    let index = merge(
        Some(&suite.index),
        entry,
        &format!("Test suite for {}project", project.name),
    );
    let entries = index.entries.len();

    let rendered = suite.with_index(index).render()?;
    files.write_if_changed(SUITE_RELATIVE_PATH, &rendered)?;
    info!(path = SUITE_RELATIVE_PATH, entries, "selenium test suite");
    Ok(())
}

fn suite_menu_item() -> MenuItem {
    MenuItem {
        category: "SeleniumTests".to_string(),
        id: "Test".to_string(),
        label: "Test".to_string(),
        message_code: "selenium_menu_test_suite".to_string(),
        link: format!("/resources/{}", SUITE_RELATIVE_PATH),
        id_prefix: "si_".to_string(),
    }
}

fn test_relative_path(controller: &ControllerMetadata) -> String {
    format!(
        "selenium/test-{}.xhtml",
        controller.form_backing_type.simple_name().to_lowercase()
    )
}

fn normalize_server_url(server_url: &str) -> String {
    if server_url.ends_with('/') {
        server_url.to_string()
    } else {
        format!("{}/", server_url)
    }
}
