use std::fs;
use std::path::{Path, PathBuf};

use sg_api::ProjectFiles;
use sg_core::ScaffoldError;

use crate::{map_cli_file_read, map_cli_file_write};

pub(crate) const WEBAPP_DIR: &str = "src/main/webapp";

/// Web application files rooted at `<project>/src/main/webapp`.
#[derive(Debug, Clone)]
pub(crate) struct FsProjectFiles {
    root: PathBuf,
}

impl FsProjectFiles {
    pub(crate) fn new(project_root: &Path) -> Self {
        Self {
            root: project_root.join(WEBAPP_DIR),
        }
    }

    pub(crate) fn resolve(&self, relative_path: &str) -> PathBuf {
        relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl ProjectFiles for FsProjectFiles {
    fn exists(&self, relative_path: &str) -> bool {
        self.resolve(relative_path).is_file()
    }

    fn read_to_string(&self, relative_path: &str) -> Result<String, ScaffoldError> {
        fs::read_to_string(self.resolve(relative_path)).map_err(map_cli_file_read)
    }

    fn write_if_changed(
        &mut self,
        relative_path: &str,
        contents: &str,
    ) -> Result<bool, ScaffoldError> {
        let path = self.resolve(relative_path);
        if path.is_file() && fs::read_to_string(&path).map_err(map_cli_file_read)? == contents {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(map_cli_file_write)?;
        }
        fs::write(&path, contents).map_err(map_cli_file_write)?;
        Ok(true)
    }
}
