mod collaborators;
mod generate;
mod models;
mod plugin;

pub use collaborators::{BuildPlugins, Collaborators, MenuRegistry, MetadataResolver, ProjectFiles};
pub use generate::{
    generate_test, is_generation_possible, GenerateOutcome, GenerateTestOptions, GeneratedTest,
    SUITE_RELATIVE_PATH,
};
pub use models::{
    BuildPlugin, ControllerMetadata, ControllerResolution, MenuItem, ProjectInfo, TypeName,
    MVC_FEATURE,
};
pub use plugin::{install_build_plugin, selenium_plugin, SELENIUM_PLUGIN_ARTIFACT_ID};
