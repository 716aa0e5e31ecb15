use serde_json::{Value, json};
use twenty_metadata_client::LogLevel;
use twenty_metadata_client::twenty::serviceclient::ServiceClient;
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";

/// Start a mock Twenty server and a client pointed at it.
pub async fn start() -> (MockServer, ServiceClient) {
    let server = MockServer::start().await;
    let client = ServiceClient::new(&server.uri(), TEST_TOKEN, LogLevel::Debug);
    (server, client)
}

pub fn graphql_data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

/// A 200 response carrying GraphQL errors, as Twenty returns for bad input.
pub fn graphql_errors(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": null,
        "errors": [{ "message": message }]
    }))
}

pub fn connection(key: &str, nodes: Vec<Value>) -> Value {
    let edges: Vec<Value> = nodes.into_iter().map(|node| json!({ "node": node })).collect();
    json!({ key: { "edges": edges } })
}

pub fn member(id: &str, first: &str, last: &str) -> Value {
    json!({ "id": id, "name": { "firstName": first, "lastName": last } })
}

pub fn created_field(name: &str, field_type: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": {
            "createOneField": { "id": format!("{name}-id"), "name": name, "type": field_type }
        }
    }))
}

pub fn already_exists(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "statusCode": 400,
        "error": "BadRequestException",
        "messages": [format!("Field with name {name} already exists")]
    }))
}

pub fn fields_list(fields: Vec<Value>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": { "fields": fields } }))
}
