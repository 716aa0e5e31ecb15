use crate::twenty::fieldmetadata::{FieldDefinition, FieldOutcome};
use crate::twenty::serviceclient::ServiceClient;

/// Per-field outcomes of a batch, in request order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(String, FieldOutcome)>,
}

impl BatchReport {
    pub fn created(&self) -> usize {
        self.count(|outcome| matches!(outcome, FieldOutcome::Created(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, FieldOutcome::AlreadyExists))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, FieldOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&FieldOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }
}

/// Ensure each field in turn. A failure does not stop the batch and
/// nothing already created is rolled back.
pub async fn ensure_fields(
    client: &ServiceClient,
    object_id: &str,
    fields: &[FieldDefinition],
) -> BatchReport {
    let mut report = BatchReport::default();

    for field in fields {
        let outcome = client.ensure_field(object_id, field).await;
        if let FieldOutcome::Failed(detail) = &outcome {
            log::warn!("Field {} on {} failed: {}", field.name, object_id, detail);
        }
        report.outcomes.push((field.name.clone(), outcome));
    }

    report
}

/// An object id and whether it came from the fallback guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectResolution {
    pub id: String,
    pub fallback: bool,
}

/// Look up an object id by singular name, falling back to `fallback`
/// when the listing fails or nothing matches.
pub async fn resolve_object_id(
    client: &ServiceClient,
    name: &str,
    fallback: &str,
) -> ObjectResolution {
    match client.find_object_id(name).await {
        Ok(Some(id)) => ObjectResolution { id, fallback: false },
        Ok(None) => {
            log::warn!("No object named '{}', using '{}'", name, fallback);
            ObjectResolution {
                id: fallback.to_string(),
                fallback: true,
            }
        }
        Err(e) => {
            log::warn!("Failed to fetch objects: {}", e);
            ObjectResolution {
                id: fallback.to_string(),
                fallback: true,
            }
        }
    }
}

/// Ensure a single field after checking the object's existing fields.
///
/// A field already listed yields `AlreadyExists` without a create call.
/// A failed listing counts as no existing fields.
pub async fn ensure_field_if_missing(
    client: &ServiceClient,
    object_id: &str,
    field: &FieldDefinition,
) -> FieldOutcome {
    let existing = client.list_fields(Some(object_id)).await.unwrap_or_else(|e| {
        log::warn!("Failed to list fields of {}: {}", object_id, e);
        vec![]
    });

    if existing.iter().any(|f| f.name == field.name) {
        log::info!("Field '{}' already exists on {}", field.name, object_id);
        return FieldOutcome::AlreadyExists;
    }

    client.ensure_field(object_id, field).await
}
