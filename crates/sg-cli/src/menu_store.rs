use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sg_api::{MenuItem, MenuRegistry};
use sg_core::ScaffoldError;

use crate::{map_cli_menu_invalid, map_cli_menu_read, map_cli_menu_write};

pub(crate) const MENU_FILE: &str = "WEB-INF/menu.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MenuFile {
    #[serde(default)]
    pub(crate) items: Vec<MenuItem>,
}

/// Menu entries kept as JSON; an item replaces any entry with the same category and id.
#[derive(Debug, Clone)]
pub(crate) struct JsonMenuStore {
    path: PathBuf,
}

impl JsonMenuStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn load(&self) -> Result<MenuFile, ScaffoldError> {
        if !self.path.exists() {
            return Ok(MenuFile::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(map_cli_menu_read)?;
        serde_json::from_str(&raw).map_err(map_cli_menu_invalid)
    }

    fn save(&self, menu: &MenuFile) -> Result<(), ScaffoldError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(map_cli_menu_write)?;
        }
        let payload = serde_json::to_string_pretty(menu).map_err(|error| {
            ScaffoldError::new("CLI_MENU_WRITE", error.to_string())
        })?;
        fs::write(&self.path, payload).map_err(map_cli_menu_write)
    }
}

impl MenuRegistry for JsonMenuStore {
    fn add_menu_item(&mut self, item: MenuItem) -> Result<(), ScaffoldError> {
        let mut menu = self.load()?;
        match menu
            .items
            .iter_mut()
            .find(|existing| existing.category == item.category && existing.id == item.id)
        {
            Some(existing) => *existing = item,
            None => menu.items.push(item),
        }
        self.save(&menu)
    }
}
