use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sg_api::{ControllerMetadata, ControllerResolution, MetadataResolver, ProjectInfo};
use sg_core::ScaffoldError;

use crate::{map_cli_project_invalid, map_cli_project_path, map_cli_project_read};

/// Project metadata as recorded in `scaffold.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectDescriptor {
    pub(crate) project: ProjectInfo,
    #[serde(default)]
    pub(crate) controllers: Vec<ControllerMetadata>,
    /// Controllers known to the project that are not scaffolded.
    #[serde(default)]
    pub(crate) plain_controllers: Vec<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct JsonProjectMetadata {
    descriptor: ProjectDescriptor,
}

impl JsonProjectMetadata {
    pub(crate) fn load(path: &Path) -> Result<Self, ScaffoldError> {
        if !path.exists() {
            return Err(ScaffoldError::new(
                "CLI_PROJECT_NOT_FOUND",
                format!("Project file does not exist: {}", path.display()),
            ));
        }

        let raw = fs::read_to_string(path).map_err(map_cli_project_read)?;
        let descriptor = serde_json::from_str(&raw).map_err(map_cli_project_invalid)?;
        Ok(Self { descriptor })
    }
}

impl MetadataResolver for JsonProjectMetadata {
    fn project(&self) -> Result<ProjectInfo, ScaffoldError> {
        Ok(self.descriptor.project.clone())
    }

    fn resolve_controller(&self, controller: &str) -> Result<ControllerResolution, ScaffoldError> {
        if let Some(found) = self
            .descriptor
            .controllers
            .iter()
            .find(|candidate| candidate.controller_type.fully_qualified() == controller)
        {
            return Ok(ControllerResolution::Scaffolded(found.clone()));
        }

        if self
            .descriptor
            .plain_controllers
            .iter()
            .any(|candidate| candidate == controller)
        {
            return Ok(ControllerResolution::NotScaffolded);
        }

        Ok(ControllerResolution::Unknown)
    }
}

pub(crate) fn resolve_project_dir(project_dir: &str) -> Result<PathBuf, ScaffoldError> {
    let path = PathBuf::from(project_dir);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map_err(map_cli_project_path)?
            .join(path)
    };

    if !absolute.is_dir() {
        return Err(ScaffoldError::new(
            "CLI_PROJECT_NOT_DIR",
            format!("project-dir is not a directory: {}", absolute.display()),
        ));
    }

    Ok(absolute)
}

pub(crate) fn resolve_project_file(project_root: &Path, project_file: Option<&str>) -> PathBuf {
    match project_file {
        Some(file) if Path::new(file).is_absolute() => PathBuf::from(file),
        Some(file) => project_root.join(file),
        None => project_root.join(crate::DEFAULT_PROJECT_FILE),
    }
}
