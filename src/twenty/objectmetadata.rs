use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Twenty object metadata (the schema description of a record type).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    /// Metadata id of the object.
    pub id: String,
    /// Singular API name, e.g. `person`.
    #[serde(default)]
    pub name_singular: String,
    /// Plural API name, e.g. `people`.
    #[serde(default)]
    pub name_plural: Option<String>,
    /// Singular display label.
    #[serde(default)]
    pub label_singular: Option<String>,
    /// Plural display label.
    #[serde(default)]
    pub label_plural: Option<String>,
    /// True if the object was created by the workspace rather than shipped by Twenty.
    #[serde(default)]
    pub is_custom: Option<bool>,
    /// True if the object is active.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Additional fields returned by the API.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Find an object id by singular name.
///
/// An exact match on `nameSingular` wins; otherwise the first object whose
/// singular name contains `name` case-insensitively is used.
pub fn find_object_id<'a>(objects: &'a [ObjectMetadata], name: &str) -> Option<&'a str> {
    if let Some(exact) = objects.iter().find(|obj| obj.name_singular == name) {
        return Some(exact.id.as_str());
    }

    let needle = name.to_lowercase();
    objects
        .iter()
        .find(|obj| obj.name_singular.to_lowercase().contains(&needle))
        .map(|obj| {
            log::info!("Found object: {} - {}", obj.name_singular, obj.id);
            obj.id.as_str()
        })
}
