use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::twenty::selectoption::SelectOption;

/// Twenty field type. Unknown types are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Number,
    DateTime,
    Date,
    Boolean,
    Select,
    MultiSelect,
    Relation,
    Uuid,
    Other(String),
}

impl FieldType {
    /// Wire name, as sent in a field's `type`.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "TEXT",
            FieldType::Number => "NUMBER",
            FieldType::DateTime => "DATE_TIME",
            FieldType::Date => "DATE",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Select => "SELECT",
            FieldType::MultiSelect => "MULTI_SELECT",
            FieldType::Relation => "RELATION",
            FieldType::Uuid => "UUID",
            FieldType::Other(other) => other,
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "TEXT" => FieldType::Text,
            "NUMBER" => FieldType::Number,
            "DATE_TIME" => FieldType::DateTime,
            "DATE" => FieldType::Date,
            "BOOLEAN" => FieldType::Boolean,
            "SELECT" => FieldType::Select,
            "MULTI_SELECT" => FieldType::MultiSelect,
            "RELATION" => FieldType::Relation,
            "UUID" => FieldType::Uuid,
            _ => FieldType::Other(value),
        }
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cardinality of a relation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationType {
    ManyToOne,
    OneToMany,
}

/// Relation settings for a `RELATION` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationSettings {
    pub relation_type: RelationType,
    pub related_object_metadata_id: String,
    /// Name of the inverse field created on the related object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_field_label: Option<String>,
}

/// A field to be created on an object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<RelationSettings>,
}

impl FieldDefinition {
    /// A field with no description, icon, options or relation settings.
    pub fn new(name: &str, label: &str, field_type: FieldType) -> Self {
        FieldDefinition {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            description: None,
            icon: None,
            options: None,
            settings: None,
        }
    }

    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        FieldDefinition {
            options: Some(options),
            ..FieldDefinition::new(name, label, FieldType::Select)
        }
    }

    pub fn relation(name: &str, label: &str, settings: RelationSettings) -> Self {
        FieldDefinition {
            settings: Some(settings),
            ..FieldDefinition::new(name, label, FieldType::Relation)
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }
}

/// Body of `POST /rest/metadata/fields`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldInput<'a> {
    pub object_metadata_id: &'a str,
    #[serde(flatten)]
    pub field: &'a FieldDefinition,
}

/// Field metadata as returned by the metadata API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    pub id: String,
    #[serde(default)]
    pub object_metadata_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub field_type: Option<FieldType>,
    /// Select options, left untyped because Twenty adds ids and may use named colors.
    #[serde(default)]
    pub options: Option<Value>,
    /// Additional fields returned by the API.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Result of ensuring a field exists on an object.
#[derive(Debug, Clone)]
pub enum FieldOutcome {
    /// The field was created. Carries the returned metadata when it parsed.
    Created(Option<FieldMetadata>),
    /// The remote reported the field already exists.
    AlreadyExists,
    /// Any other failure, with the status and raw body or transport error.
    Failed(String),
}

impl FieldOutcome {
    /// `Created` and `AlreadyExists` both count as success.
    pub fn is_success(&self) -> bool {
        !matches!(self, FieldOutcome::Failed(_))
    }
}
