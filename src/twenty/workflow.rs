use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

pub const LIST_WORKFLOWS_QUERY: &str = r#"
{
    workflows {
        edges {
            node {
                id
                name
            }
        }
    }
}
"#;

pub const CREATE_WORKFLOW_MUTATION: &str = r#"
mutation CreateWorkflow($data: WorkflowCreateInput!) {
    createWorkflow(data: $data) {
        id
        name
    }
}
"#;

pub const CREATE_WORKFLOW_VERSION_MUTATION: &str = r#"
mutation CreateWorkflowVersion($data: WorkflowVersionCreateInput!) {
    createWorkflowVersion(data: $data) {
        id
        name
        status
        trigger
        steps
    }
}
"#;

pub const CREATE_WORKFLOW_VERSION_STEP_MUTATION: &str = r#"
mutation CreateWorkflowVersionStep($input: CreateWorkflowVersionStepInput!) {
    createWorkflowVersionStep(input: $input) {
        id
        name
        type
        settings
    }
}
"#;

pub const UPDATE_WORKFLOW_VERSION_MUTATION: &str = r#"
mutation UpdateWorkflowVersion($id: UUID!, $data: WorkflowVersionUpdateInput!) {
    updateWorkflowVersion(id: $id, data: $data) {
        id
        status
        steps
    }
}
"#;

pub const ACTIVATE_WORKFLOW_VERSION_MUTATION: &str = r#"
mutation ActivateWorkflowVersion($workflowVersionId: UUID!) {
    activateWorkflowVersion(workflowVersionId: $workflowVersionId) {
        id
        status
    }
}
"#;

/// Script for the code step: derives the SCREAMING_SNAKE `assignedRep`
/// value from the creator of the triggering person.
pub const ASSIGNED_REP_CODE: &str = r#"
const person = trigger.record;
const createdBy = person.createdBy;

let firstName = '';
let lastName = '';

if (createdBy && createdBy.name) {
    firstName = createdBy.name.firstName || '';
    lastName = createdBy.name.lastName || '';
}

const fullName = (firstName + ' ' + lastName).trim();
const assignedRepValue = fullName.toUpperCase().replace(/\s+/g, '_').replace(/[^A-Z0-9_]/g, '_');

return {
    personId: person.id,
    assignedRep: assignedRepValue
};
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    DatabaseEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSettings {
    pub event_name: String,
    pub object_type: String,
}

/// What starts a workflow version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTrigger {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    pub settings: TriggerSettings,
}

impl WorkflowTrigger {
    /// Fire when `{object_type}.{event}` happens, e.g. `person.created`.
    pub fn database_event(object_type: &str, event: &str) -> Self {
        WorkflowTrigger {
            trigger_type: TriggerType::DatabaseEvent,
            settings: TriggerSettings {
                event_name: format!("{}.{}", object_type, event),
                object_type: object_type.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepType {
    Code,
    UpdateRecord,
}

/// Canvas position of a step in the workflow editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepPosition {
    pub x: i32,
    pub y: i32,
}

/// Input of `createWorkflowVersionStep`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStepInput {
    pub workflow_version_id: String,
    pub step_type: StepType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_step_id: Option<String>,
    pub position: StepPosition,
}

/// A fully specified step, as stored in a version's `steps` array.
///
/// `settings` may reference earlier outputs with `{{...}}` placeholders,
/// which the workflow engine resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub valid: bool,
    pub settings: Value,
}

/// Step that writes `FIRST_LAST` of the record creator into `assignedRep`.
pub fn assigned_rep_update_step(id: Uuid) -> WorkflowStep {
    WorkflowStep {
        id: id.to_string(),
        name: "Update Person assignedRep".to_string(),
        step_type: StepType::UpdateRecord,
        valid: true,
        settings: json!({
            "objectName": "person",
            "input": {
                "objectRecord": {
                    "id": "{{trigger.record.id}}",
                    "assignedRep": "{{trigger.record.createdBy.name.firstName | upcase}}_{{trigger.record.createdBy.name.lastName | upcase}}"
                }
            }
        }),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowVersionRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub trigger: Option<Value>,
    #[serde(default)]
    pub steps: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowStepRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub step_type: Option<String>,
    #[serde(default)]
    pub settings: Option<Value>,
}
