use reqwest::Client;
use serde_json::{Value, json};

use crate::LogLevel;
use crate::twenty::fieldmetadata::{
    CreateFieldInput, FieldDefinition, FieldMetadata, FieldOutcome,
};
use crate::twenty::graphql::{
    Connection, GraphQlRequest, GraphQlResponse, INTROSPECT_TYPE_QUERY, IntrospectedType,
    take_field,
};
use crate::twenty::objectmetadata::{ObjectMetadata, find_object_id};
use crate::twenty::parse::{
    classify_create_response, parse_fields_from_response, parse_objects_from_response,
};
use crate::twenty::selectoption::SelectOption;
use crate::twenty::workflow::{
    ACTIVATE_WORKFLOW_VERSION_MUTATION, CREATE_WORKFLOW_MUTATION,
    CREATE_WORKFLOW_VERSION_MUTATION, CREATE_WORKFLOW_VERSION_STEP_MUTATION, CreateStepInput,
    LIST_WORKFLOWS_QUERY, UPDATE_WORKFLOW_VERSION_MUTATION, WorkflowRecord, WorkflowStep,
    WorkflowStepRecord, WorkflowTrigger, WorkflowVersionRecord,
};
use crate::twenty::workspacemember::{WORKSPACE_MEMBERS_QUERY, WorkspaceMember};

/// HTTP client for the Twenty metadata REST API and GraphQL API.
pub struct ServiceClient {
    client: Client,
    base_url: String,
    token: String,
    log_level: LogLevel,
}

impl ServiceClient {
    /// Create a new client for the given base URL and API key.
    pub fn new(base_url: &str, token: &str, log_level: LogLevel) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            log_level,
        }
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all object metadata in the workspace.
    pub async fn list_objects(&self) -> Result<Vec<ObjectMetadata>, String> {
        let url = format!("{}/rest/metadata/objects", self.base_url);
        let json = self.get_json(&url).await?;
        parse_objects_from_response(&json)
    }

    /// Resolve an object id by singular name (exact match, then substring).
    pub async fn find_object_id(&self, name_singular: &str) -> Result<Option<String>, String> {
        let objects = self.list_objects().await?;
        Ok(find_object_id(&objects, name_singular).map(str::to_string))
    }

    /// List fields, optionally restricted to one object.
    pub async fn list_fields(&self, object_id: Option<&str>) -> Result<Vec<FieldMetadata>, String> {
        let mut url = format!("{}/rest/metadata/fields", self.base_url);
        if let Some(object_id) = object_id {
            let filter = format!("objectMetadataId[eq]={}", object_id);
            url.push_str("?filter=");
            url.push_str(&urlencoding::encode(&filter));
        }

        let json = self.get_json(&url).await?;
        parse_fields_from_response(&json)
    }

    /// List fields with the given name across all objects.
    pub async fn find_fields_by_name(&self, name: &str) -> Result<Vec<FieldMetadata>, String> {
        let filter = format!("name[eq]={}", name);
        let url = format!(
            "{}/rest/metadata/fields?filter={}",
            self.base_url,
            urlencoding::encode(&filter)
        );

        let json = self.get_json(&url).await?;
        parse_fields_from_response(&json)
    }

    /// Create a field, treating an "already exists" rejection as success.
    ///
    /// Never returns `Err`; transport errors become `FieldOutcome::Failed`.
    pub async fn ensure_field(&self, object_id: &str, field: &FieldDefinition) -> FieldOutcome {
        let url = format!("{}/rest/metadata/fields", self.base_url);
        let input = CreateFieldInput {
            object_metadata_id: object_id,
            field,
        };

        self.log_payload(&url, &input);

        let resp = match self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(&input)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => return FieldOutcome::Failed(format!("Request failed: {e}")),
        };

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        classify_create_response(status, &body)
    }

    /// Replace the option list of a select field.
    pub async fn update_field_options(
        &self,
        field_id: &str,
        options: &[SelectOption],
    ) -> Result<(), String> {
        let url = format!("{}/rest/metadata/fields/{}", self.base_url, field_id);
        let payload = json!({ "options": options });

        self.log_payload(&url, &payload);

        let resp = self
            .client
            .patch(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("Twenty API error ({}): {}", status, body));
        }

        Ok(())
    }

    /// Execute a GraphQL query or mutation and return its `data`.
    ///
    /// A 200 response carrying an `errors` array is returned as `Err`.
    pub async fn graphql(&self, query: &str, variables: Option<Value>) -> Result<Value, String> {
        let url = format!("{}/graphql", self.base_url);
        let request = GraphQlRequest { query, variables };

        self.log_payload(&url, &request);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("Twenty API error ({}): {}", status, body));
        }

        let parsed: GraphQlResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse JSON: {e}"))?;

        parsed.into_data()
    }

    /// Fetch every workspace member.
    pub async fn list_workspace_members(&self) -> Result<Vec<WorkspaceMember>, String> {
        let data = self.graphql(WORKSPACE_MEMBERS_QUERY, None).await?;
        let members: Connection<WorkspaceMember> = take_field(&data, "workspaceMembers")?;
        Ok(members.into_nodes())
    }

    /// Introspect a GraphQL type; `None` if the schema has no such type.
    pub async fn introspect_type(
        &self,
        type_name: &str,
    ) -> Result<Option<IntrospectedType>, String> {
        let data = self
            .graphql(INTROSPECT_TYPE_QUERY, Some(json!({ "name": type_name })))
            .await?;

        match data.get("__type") {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| format!("Failed to parse __type: {e}")),
        }
    }

    /// List every workflow by id and name.
    pub async fn list_workflows(&self) -> Result<Vec<WorkflowRecord>, String> {
        let data = self.graphql(LIST_WORKFLOWS_QUERY, None).await?;
        let workflows: Connection<WorkflowRecord> = take_field(&data, "workflows")?;
        Ok(workflows.into_nodes())
    }

    /// Create an empty workflow; versions are added separately.
    pub async fn create_workflow(&self, name: &str) -> Result<WorkflowRecord, String> {
        let data = self
            .graphql(
                CREATE_WORKFLOW_MUTATION,
                Some(json!({ "data": { "name": name } })),
            )
            .await?;
        take_field(&data, "createWorkflow")
    }

    /// Create a version of a workflow with the given trigger and no steps.
    pub async fn create_workflow_version(
        &self,
        workflow_id: &str,
        name: &str,
        trigger: &WorkflowTrigger,
    ) -> Result<WorkflowVersionRecord, String> {
        let variables = json!({
            "data": {
                "name": name,
                "workflow": { "connect": { "id": workflow_id } },
                "trigger": trigger,
                "steps": []
            }
        });

        let data = self
            .graphql(CREATE_WORKFLOW_VERSION_MUTATION, Some(variables))
            .await?;
        take_field(&data, "createWorkflowVersion")
    }

    /// Append a step to a version, optionally after a parent step.
    pub async fn create_workflow_version_step(
        &self,
        input: &CreateStepInput,
    ) -> Result<WorkflowStepRecord, String> {
        let data = self
            .graphql(
                CREATE_WORKFLOW_VERSION_STEP_MUTATION,
                Some(json!({ "input": input })),
            )
            .await?;
        take_field(&data, "createWorkflowVersionStep")
    }

    /// Replace the step list of a workflow version.
    pub async fn update_workflow_version_steps(
        &self,
        version_id: &str,
        steps: &[WorkflowStep],
    ) -> Result<WorkflowVersionRecord, String> {
        let variables = json!({
            "id": version_id,
            "data": { "steps": steps }
        });

        let data = self
            .graphql(UPDATE_WORKFLOW_VERSION_MUTATION, Some(variables))
            .await?;
        take_field(&data, "updateWorkflowVersion")
    }

    /// Activate a workflow version so its trigger starts firing.
    pub async fn activate_workflow_version(
        &self,
        version_id: &str,
    ) -> Result<WorkflowVersionRecord, String> {
        let data = self
            .graphql(
                ACTIVATE_WORKFLOW_VERSION_MUTATION,
                Some(json!({ "workflowVersionId": version_id })),
            )
            .await?;
        take_field(&data, "activateWorkflowVersion")
    }

    async fn get_json(&self, url: &str) -> Result<Value, String> {
        if self.logs_requests() {
            log::debug!("GET {}", url);
        }

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("Twenty API error ({}): {}", status, body));
        }

        resp.json()
            .await
            .map_err(|e| format!("Failed to parse JSON: {e}"))
    }

    /// Request logging follows the client's `LogLevel` for every verb.
    fn logs_requests(&self) -> bool {
        self.log_level == LogLevel::Debug
    }

    fn log_payload<T: serde::Serialize>(&self, url: &str, payload: &T) {
        if self.logs_requests() {
            let body = serde_json::to_string_pretty(payload).unwrap_or_default();
            log::debug!("Url: {}", url);
            log::debug!("Payload: {}", body);
        }
    }
}
