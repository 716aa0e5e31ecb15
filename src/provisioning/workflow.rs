use uuid::Uuid;

use crate::twenty::serviceclient::ServiceClient;
use crate::twenty::workflow::{
    CreateStepInput, StepPosition, StepType, WorkflowTrigger, WorkflowVersionRecord,
    assigned_rep_update_step,
};

pub const AUTO_ASSIGN_WORKFLOW_NAME: &str = "Auto-assign leads to uploader";
pub const AUTO_ASSIGN_VERSION_NAME: &str = "v1";

pub const CREATE_WORKFLOW: &str = "create workflow";
pub const CREATE_VERSION: &str = "create workflow version";
pub const ADD_CODE_STEP: &str = "add CODE step";
pub const ADD_UPDATE_STEP: &str = "add UPDATE_RECORD step";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Completed, carrying the id of what it created.
    Done(String),
    Failed(String),
    /// Not attempted because an earlier step failed.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct ProvisionStep {
    pub name: &'static str,
    pub status: StepStatus,
}

/// Outcome of provisioning the auto-assign workflow. Nothing is rolled back.
#[derive(Debug, Clone, Default)]
pub struct ProvisionReport {
    /// Id of a same-named workflow found before provisioning began.
    pub existing: Option<String>,
    pub steps: Vec<ProvisionStep>,
}

impl ProvisionReport {
    pub fn status(&self, name: &str) -> Option<&StepStatus> {
        self.steps
            .iter()
            .find(|step| step.name == name)
            .map(|step| &step.status)
    }

    pub fn id_of(&self, name: &str) -> Option<&str> {
        match self.status(name) {
            Some(StepStatus::Done(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.existing.is_none()
            && !self.steps.is_empty()
            && self
                .steps
                .iter()
                .all(|step| matches!(step.status, StepStatus::Done(_)))
    }

    fn record(&mut self, name: &'static str, result: Result<String, String>) -> Option<String> {
        let (status, id) = match result {
            Ok(id) => (StepStatus::Done(id.clone()), Some(id)),
            Err(e) => {
                log::warn!("Step '{}' failed: {}", name, e);
                (StepStatus::Failed(e), None)
            }
        };
        self.steps.push(ProvisionStep { name, status });
        id
    }

    fn skipping(mut self, names: &[&'static str]) -> Self {
        for &name in names {
            self.steps.push(ProvisionStep {
                name,
                status: StepStatus::Skipped,
            });
        }
        self
    }
}

/// Provision the workflow that assigns new people to their uploader.
///
/// Creates the workflow, a `v1` version triggered by `person.created`, a
/// CODE step and an UPDATE_RECORD step chained after it. The version is not
/// activated. Once a step fails, later steps are skipped without a request.
pub async fn provision_auto_assign_workflow(client: &ServiceClient) -> ProvisionReport {
    let mut report = ProvisionReport::default();

    match client.list_workflows().await {
        Ok(workflows) => {
            if let Some(found) = workflows
                .into_iter()
                .find(|w| w.name.as_deref() == Some(AUTO_ASSIGN_WORKFLOW_NAME))
            {
                report.existing = Some(found.id);
                return report;
            }
        }
        Err(e) => log::warn!("Could not list workflows: {}", e),
    }

    let created = client
        .create_workflow(AUTO_ASSIGN_WORKFLOW_NAME)
        .await
        .map(|w| w.id);
    let Some(workflow_id) = report.record(CREATE_WORKFLOW, created) else {
        return report.skipping(&[CREATE_VERSION, ADD_CODE_STEP, ADD_UPDATE_STEP]);
    };

    let trigger = WorkflowTrigger::database_event("person", "created");
    let version = client
        .create_workflow_version(&workflow_id, AUTO_ASSIGN_VERSION_NAME, &trigger)
        .await
        .map(|v| {
            log::info!("Trigger: {:?}", v.trigger);
            v.id
        });
    let Some(version_id) = report.record(CREATE_VERSION, version) else {
        return report.skipping(&[ADD_CODE_STEP, ADD_UPDATE_STEP]);
    };

    let code_step = client
        .create_workflow_version_step(&CreateStepInput {
            workflow_version_id: version_id.clone(),
            step_type: StepType::Code,
            parent_step_id: None,
            position: StepPosition { x: 0, y: 100 },
        })
        .await
        .map(|s| s.id);
    let Some(code_step_id) = report.record(ADD_CODE_STEP, code_step) else {
        return report.skipping(&[ADD_UPDATE_STEP]);
    };

    let update_step = client
        .create_workflow_version_step(&CreateStepInput {
            workflow_version_id: version_id,
            step_type: StepType::UpdateRecord,
            parent_step_id: Some(code_step_id),
            position: StepPosition { x: 0, y: 200 },
        })
        .await
        .map(|s| s.id);
    report.record(ADD_UPDATE_STEP, update_step);

    report
}

/// Replace a version's steps with the templated `assignedRep` update step.
pub async fn configure_assigned_rep_steps(
    client: &ServiceClient,
    version_id: &str,
) -> Result<WorkflowVersionRecord, String> {
    let steps = vec![assigned_rep_update_step(Uuid::new_v4())];
    client.update_workflow_version_steps(version_id, &steps).await
}
