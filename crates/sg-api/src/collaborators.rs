use sg_core::ScaffoldError;

use crate::{BuildPlugin, ControllerResolution, MenuItem, ProjectInfo};

pub trait MetadataResolver {
    fn project(&self) -> Result<ProjectInfo, ScaffoldError>;

    fn resolve_controller(&self, controller: &str) -> Result<ControllerResolution, ScaffoldError>;
}

/// Files of the web application root, addressed by `/`-separated relative paths.
pub trait ProjectFiles {
    fn exists(&self, relative_path: &str) -> bool;

    fn read_to_string(&self, relative_path: &str) -> Result<String, ScaffoldError>;

    /// Returns `false` when the file already held `contents`.
    fn write_if_changed(&mut self, relative_path: &str, contents: &str)
        -> Result<bool, ScaffoldError>;
}

pub trait MenuRegistry {
    fn add_menu_item(&mut self, item: MenuItem) -> Result<(), ScaffoldError>;
}

pub trait BuildPlugins {
    fn installed_plugins(&self) -> Result<Vec<BuildPlugin>, ScaffoldError>;

    fn add_plugin(&mut self, plugin: &BuildPlugin) -> Result<(), ScaffoldError>;
}

pub struct Collaborators<'a> {
    pub metadata: &'a dyn MetadataResolver,
    pub files: &'a mut dyn ProjectFiles,
    pub menu: &'a mut dyn MenuRegistry,
    pub plugins: &'a mut dyn BuildPlugins,
}
