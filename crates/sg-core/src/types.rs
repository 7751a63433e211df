use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_VALUE: i64 = 1;
pub const BLANK_VALUE: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    String,
    Boolean,
    Integer,
    Long,
    Short,
    Double,
    Float,
    Decimal,
    Temporal,
    Collection,
    EntityReference,
    #[serde(other)]
    Other,
}

impl FieldKind {
    /// Collections and references to other scaffolded entities never take part
    /// in population or verification.
    pub fn is_eligible(self) -> bool {
        !matches!(self, Self::Collection | Self::EntityReference)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemporalBound {
    Past,
    Future,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConstraints {
    #[serde(default)]
    pub min_value: Option<i64>,
    #[serde(default)]
    pub temporal_bound: Option<TemporalBound>,
    #[serde(default)]
    pub temporal_style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub constraints: Option<FieldConstraints>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constraints: None,
        }
    }

    pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn is_eligible(&self) -> bool {
        self.kind.is_eligible()
    }

    pub fn seed(&self) -> i64 {
        self.constraints
            .as_ref()
            .and_then(|constraints| constraints.min_value)
            .unwrap_or(DEFAULT_MIN_VALUE)
    }

    pub fn temporal_bound(&self) -> Option<TemporalBound> {
        self.constraints
            .as_ref()
            .and_then(|constraints| constraints.temporal_bound)
    }

    pub fn temporal_style(&self) -> Option<&str> {
        self.constraints
            .as_ref()
            .and_then(|constraints| constraints.temporal_style.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    Open,
    Type,
    ClickAndWait,
    VerifyText,
}

impl Command {
    /// Command name as the browser-automation tool spells it.
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Type => "type",
            Self::ClickAndWait => "clickAndWait",
            Self::VerifyText => "verifyText",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    pub command: Command,
    pub target: String,
    pub value: String,
}

impl TestStep {
    pub fn new(command: Command, target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            command,
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn without_value(command: Command, target: impl Into<String>) -> Self {
        Self::new(command, target, BLANK_VALUE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub title: String,
    pub steps: Vec<TestStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteEntry {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteIndex {
    pub title: String,
    pub entries: Vec<SuiteEntry>,
}

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn seed_defaults_to_one_without_min_value() {
        let field = FieldDescriptor::new("age", FieldKind::Integer);
        assert_eq!(field.seed(), 1);

        let seeded = field.with_constraints(FieldConstraints {
            min_value: Some(18),
            ..FieldConstraints::default()
        });
        assert_eq!(seeded.seed(), 18);
    }

    #[test]
    fn collections_and_entity_references_are_not_eligible() {
        assert!(!FieldDescriptor::new("visits", FieldKind::Collection).is_eligible());
        assert!(!FieldDescriptor::new("owner", FieldKind::EntityReference).is_eligible());
        assert!(FieldDescriptor::new("name", FieldKind::String).is_eligible());
        assert!(FieldDescriptor::new("blob", FieldKind::Other).is_eligible());
    }

    #[test]
    fn field_descriptor_deserializes_camel_case_json() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{
  "name": "birthDate",
  "kind": "temporal",
  "constraints": {"temporalBound": "past", "temporalStyle": "M-"}
}"#,
        )
        .expect("field should deserialize");

        assert_eq!(field.kind, FieldKind::Temporal);
        assert_eq!(field.temporal_bound(), Some(TemporalBound::Past));
        assert_eq!(field.temporal_style(), Some("M-"));
        assert_eq!(field.seed(), 1);
    }

    #[test]
    fn unknown_field_kind_deserializes_as_other() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name":"photo","kind":"byteArray"}"#).expect("field");
        assert_eq!(field.kind, FieldKind::Other);
    }

    #[test]
    fn command_names_match_selenese() {
        assert_eq!(Command::Open.name(), "open");
        assert_eq!(Command::Type.name(), "type");
        assert_eq!(Command::ClickAndWait.name(), "clickAndWait");
        assert_eq!(Command::VerifyText.name(), "verifyText");
        assert_eq!(TestStep::without_value(Command::Open, "/").value, BLANK_VALUE);
    }
}
