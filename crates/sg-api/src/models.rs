use serde::{Deserialize, Serialize};
use sg_core::FieldDescriptor;

pub const MVC_FEATURE: &str = "mvc";

/// Fully qualified type name such as `com.example.domain.Pet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(pub String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn fully_qualified(&self) -> &str {
        &self.0
    }

    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProjectInfo {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|installed| installed == feature)
    }
}

/// What a scaffolded web controller exposes about its form-backing entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerMetadata {
    pub controller_type: TypeName,
    pub form_backing_type: TypeName,
    pub path: String,
    #[serde(default = "default_allows_create")]
    pub allows_create: bool,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub embedded_id_fields: Vec<FieldDescriptor>,
}

fn default_allows_create() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerResolution {
    Unknown,
    NotScaffolded,
    Scaffolded(ControllerMetadata),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub category: String,
    pub id: String,
    pub label: String,
    pub message_code: String,
    pub link: String,
    pub id_prefix: String,
}

/// Build-tool plugin descriptor; `snippet` is the full `<plugin>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlugin {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub snippet: String,
}
