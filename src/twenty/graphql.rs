use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `POST /graphql` request.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Standard GraphQL response shape.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// Relay-style connection returned by record queries.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

impl GraphQlResponse {
    /// Turn an `errors` array into `Err`, otherwise return `data`.
    pub fn into_data(self) -> Result<Value, String> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let pretty = serde_json::to_string_pretty(&errors)
                .unwrap_or_else(|_| format!("{:?}", errors));
            return Err(format!("GraphQL error: {}", pretty));
        }

        Ok(self.data.unwrap_or(Value::Null))
    }
}

/// Deserialize `data[key]` into `T`.
pub fn take_field<T: serde::de::DeserializeOwned>(data: &Value, key: &str) -> Result<T, String> {
    let value = data
        .get(key)
        .filter(|value| !value.is_null())
        .ok_or_else(|| format!("GraphQL response is missing '{}'", key))?;

    serde_json::from_value(value.clone()).map_err(|e| format!("Failed to parse '{}': {e}", key))
}

/// Result of a `__type` introspection query.
#[derive(Debug, Deserialize)]
pub struct IntrospectedType {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<IntrospectedField>,
}

// Scalar and enum types report `fields: null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectedField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: IntrospectedTypeRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectedTypeRef {
    pub name: Option<String>,
    pub kind: Option<String>,
}

pub const INTROSPECT_TYPE_QUERY: &str = r#"
query IntrospectType($name: String!) {
    __type(name: $name) {
        name
        fields {
            name
            type {
                name
                kind
            }
        }
    }
}
"#;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn errors_inside_ok_response_become_err() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "Cannot query field \"workflowz\"" }]
        }))
        .expect("response");

        let err = response.into_data().expect_err("errors should fail");
        assert!(err.starts_with("GraphQL error:"));
        assert!(err.contains("workflowz"));
    }

    #[test]
    fn empty_errors_array_is_not_an_error() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": { "createWorkflow": { "id": "w1" } },
            "errors": []
        }))
        .expect("response");

        let data = response.into_data().expect("data");
        assert_eq!(data["createWorkflow"]["id"], "w1");
    }

    #[test]
    fn take_field_unwraps_connections() {
        let data = json!({
            "workflows": { "edges": [ { "node": { "id": "w1" } }, { "node": { "id": "w2" } } ] }
        });
        let connection: Connection<Value> = take_field(&data, "workflows").expect("connection");
        let ids: Vec<Value> = connection
            .into_nodes()
            .into_iter()
            .map(|n| n["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!("w1"), json!("w2")]);

        assert!(take_field::<Value>(&data, "missing").is_err());
    }

    #[test]
    fn null_introspection_fields_are_empty() {
        let parsed: IntrospectedType =
            serde_json::from_value(json!({ "name": "DateTime", "fields": null })).expect("type");
        assert!(parsed.fields.is_empty());

        let parsed: IntrospectedType = serde_json::from_value(json!({
            "name": "Person",
            "fields": [ { "name": "assignedRep", "type": { "name": null, "kind": "OBJECT" } } ]
        }))
        .expect("type");
        assert_eq!(parsed.fields[0].name, "assignedRep");
        assert_eq!(parsed.fields[0].field_type.kind.as_deref(), Some("OBJECT"));
    }
}
