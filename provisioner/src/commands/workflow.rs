use twenty_metadata_client::provisioning::workflow::{
    ADD_CODE_STEP, ADD_UPDATE_STEP, AUTO_ASSIGN_WORKFLOW_NAME, CREATE_VERSION, CREATE_WORKFLOW,
    StepStatus, configure_assigned_rep_steps, provision_auto_assign_workflow,
};
use twenty_metadata_client::twenty::serviceclient::ServiceClient;
use twenty_metadata_client::twenty::workflow::ASSIGNED_REP_CODE;

const RULE: &str = "============================================================";

pub async fn provision(client: &ServiceClient) -> Result<(), String> {
    println!("{}", RULE);
    println!("Twenty CRM Workflow: {}", AUTO_ASSIGN_WORKFLOW_NAME);
    println!("{}", RULE);

    let report = provision_auto_assign_workflow(client).await;

    if let Some(existing) = &report.existing {
        println!("\nWorkflow already exists: {}", existing);
        println!("Delete it first if you want to recreate.");
        return Ok(());
    }

    for step in &report.steps {
        match &step.status {
            StepStatus::Done(id) => println!("  [OK] {}: {}", step.name, id),
            StepStatus::Failed(e) => println!("  [FAIL] {}: {}", step.name, e),
            StepStatus::Skipped => println!("  - Skipped: {}", step.name),
        }
    }

    if report.id_of(CREATE_WORKFLOW).is_none() || report.id_of(CREATE_VERSION).is_none() {
        println!("\nFailed to provision workflow.");
        return Ok(());
    }

    println!("\n{}", RULE);
    if report.is_complete() {
        println!("Workflow created successfully!");
    } else {
        println!("Workflow created with missing steps.");
    }
    println!("Workflow ID: {}", report.id_of(CREATE_WORKFLOW).unwrap_or_default());
    println!("Version ID: {}", report.id_of(CREATE_VERSION).unwrap_or_default());
    if report.id_of(ADD_CODE_STEP).is_some() && report.id_of(ADD_UPDATE_STEP).is_none() {
        println!("The UPDATE_RECORD step must be added by hand.");
    }
    println!("\nNext steps:");
    println!("1. Go to Twenty CRM -> Workflows");
    println!("2. Open '{}'", AUTO_ASSIGN_WORKFLOW_NAME);
    println!("3. Configure the CODE step with the JavaScript below");
    println!("4. Configure the UPDATE_RECORD step to set assignedRep");
    println!("5. Activate the workflow");
    println!("{}", RULE);
    println!("{}", ASSIGNED_REP_CODE.trim());

    Ok(())
}

pub async fn update_steps(client: &ServiceClient, version_id: &str) -> Result<(), String> {
    match configure_assigned_rep_steps(client, version_id).await {
        Ok(version) => {
            println!("[SUCCESS] Updated version {}", version.id);
            let steps = serde_json::to_string_pretty(&version.steps).map_err(|e| e.to_string())?;
            println!("{}", steps);
        }
        Err(e) => println!("[FAIL] {}", e),
    }
    Ok(())
}

pub async fn activate(client: &ServiceClient, version_id: &str) -> Result<(), String> {
    match client.activate_workflow_version(version_id).await {
        Ok(version) => println!(
            "  Activated: {}",
            version.status.as_deref().unwrap_or("unknown")
        ),
        Err(e) => println!("[FAIL] {}", e),
    }
    Ok(())
}
