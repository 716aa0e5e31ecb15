use reqwest::StatusCode;
use serde_json::Value;

use crate::twenty::fieldmetadata::{FieldMetadata, FieldOutcome};
use crate::twenty::objectmetadata::ObjectMetadata;

const ALREADY_EXISTS_MARKER: &str = "already exist";

/// True if an error body reports a duplicate. Twenty has no stable error code for this.
pub(crate) fn is_already_exists(body: &str) -> bool {
    body.to_lowercase().contains(ALREADY_EXISTS_MARKER)
}

/// Interpret the response of a field create call.
pub(crate) fn classify_create_response(status: StatusCode, body: &str) -> FieldOutcome {
    if status.is_success() {
        let created = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| parse_created_field(&json));
        return FieldOutcome::Created(created);
    }

    if is_already_exists(body) {
        return FieldOutcome::AlreadyExists;
    }

    FieldOutcome::Failed(format!("Twenty API error ({}): {}", status, body))
}

/// Extract `data.createOneField` from a create response.
pub(crate) fn parse_created_field(json: &Value) -> Option<FieldMetadata> {
    let created = json.get("data")?.get("createOneField")?;
    serde_json::from_value(created.clone()).ok()
}

/// Parse the object list from a `{ data: { objects: [...] } }` envelope.
pub(crate) fn parse_objects_from_response(json: &Value) -> Result<Vec<ObjectMetadata>, String> {
    let objects = json
        .get("data")
        .and_then(|data| data.get("objects"))
        .ok_or_else(|| "Invalid response from Twenty: missing data.objects".to_string())?;

    serde_json::from_value(objects.clone()).map_err(|e| format!("Failed to parse objects: {e}"))
}

/// Parse a field list. Accepts the `data.fields` envelope, a bare
/// `fields` key, or a top-level array.
pub(crate) fn parse_fields_from_response(json: &Value) -> Result<Vec<FieldMetadata>, String> {
    let fields = json
        .get("data")
        .and_then(|data| data.get("fields"))
        .or_else(|| json.get("fields"))
        .or_else(|| json.is_array().then_some(json))
        .ok_or_else(|| "Invalid response from Twenty: missing fields".to_string())?;

    serde_json::from_value(fields.clone()).map_err(|e| format!("Failed to parse fields: {e}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn already_exists_is_case_insensitive() {
        assert!(is_already_exists(
            r#"{"messages":["Field with name 'status' Already Exists"]}"#
        ));
        assert!(is_already_exists("Name already exists on object"));
        assert!(!is_already_exists(r#"{"error":"Bad Request"}"#));
    }

    #[test]
    fn classify_created() {
        let body = json!({
            "data": { "createOneField": { "id": "f1", "name": "caption", "type": "TEXT" } }
        })
        .to_string();
        match classify_create_response(StatusCode::OK, &body) {
            FieldOutcome::Created(Some(field)) => assert_eq!(field.name, "caption"),
            other => panic!("unexpected outcome: {other:?}"),
        }

        let outcome = classify_create_response(StatusCode::CREATED, "not json");
        assert!(matches!(outcome, FieldOutcome::Created(None)));
    }

    #[test]
    fn classify_conflict_and_failure() {
        let conflict = classify_create_response(
            StatusCode::BAD_REQUEST,
            r#"{"messages":["Field already exists"]}"#,
        );
        assert!(matches!(conflict, FieldOutcome::AlreadyExists));

        let failed =
            classify_create_response(StatusCode::UNAUTHORIZED, r#"{"error":"Unauthorized"}"#);
        match failed {
            FieldOutcome::Failed(detail) => {
                assert!(detail.contains("401"));
                assert!(detail.contains("Unauthorized"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn field_lists_in_every_shape() {
        let field = json!({ "id": "f1", "name": "assignedRep", "type": "SELECT" });

        let enveloped = json!({ "data": { "fields": [field.clone()] } });
        let bare = json!({ "fields": [field.clone()] });
        let array = json!([field]);

        for shape in [enveloped, bare, array] {
            let fields = parse_fields_from_response(&shape).expect("fields");
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].name, "assignedRep");
        }

        assert!(parse_fields_from_response(&json!({ "data": {} })).is_err());
    }

    #[test]
    fn objects_require_envelope() {
        let json = json!({ "data": { "objects": [ { "id": "o1", "nameSingular": "person" } ] } });
        let objects = parse_objects_from_response(&json).expect("objects");
        assert_eq!(objects[0].id, "o1");

        assert!(parse_objects_from_response(&json!({ "objects": [] })).is_err());
    }
}
