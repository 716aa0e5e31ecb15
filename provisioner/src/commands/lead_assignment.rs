use twenty_metadata_client::provisioning::catalog::{PERSON_FALLBACK_ID, lead_assignment_field};
use twenty_metadata_client::provisioning::fields::{ensure_field_if_missing, resolve_object_id};
use twenty_metadata_client::twenty::fieldmetadata::FieldOutcome;
use twenty_metadata_client::twenty::serviceclient::ServiceClient;

use crate::commands::print_outcome;

pub async fn run(client: &ServiceClient) -> Result<(), String> {
    println!("\n=== Adding Lead Assignment Field to Twenty CRM ===\n");

    println!("[1] Finding Person object...");
    let person = resolve_object_id(client, "person", PERSON_FALLBACK_ID).await;
    if person.fallback {
        println!("[ERROR] Could not find Person object. Trying standard ID...");
    }
    println!("    Person Object ID: {}", person.id);

    let field = lead_assignment_field();
    println!("\n[2] Adding {} field...", field.name);
    let outcome = ensure_field_if_missing(client, &person.id, &field).await;
    print_outcome(&field.name, &outcome);

    match outcome {
        FieldOutcome::Failed(_) => {
            println!("\n[FAILED] Could not add field. Check Twenty CRM manually.");
            println!("\nManual steps:");
            println!("1. Go to {}", client.base_url());
            println!("2. Settings > Data Model > People");
            println!("3. Add field: {} (Text)", field.name);
        }
        _ => {
            println!("\n[DONE] Field is present on Person.");
        }
    }

    Ok(())
}
