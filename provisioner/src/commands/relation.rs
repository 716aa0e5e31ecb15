use twenty_metadata_client::provisioning::catalog::assigned_rep_relation;
use twenty_metadata_client::twenty::fieldmetadata::CreateFieldInput;
use twenty_metadata_client::twenty::serviceclient::ServiceClient;

use crate::commands::print_outcome;
use crate::config::Secrets;

pub async fn run(
    client: &ServiceClient,
    secrets: &Secrets,
    with_inverse: bool,
) -> Result<(), String> {
    println!("=== Creating 'Assigned Rep' Relation Field ===");

    let field = assigned_rep_relation(&secrets.objects.workspace_member, with_inverse);
    let input = CreateFieldInput {
        object_metadata_id: &secrets.objects.person,
        field: &field,
    };
    let payload = serde_json::to_string_pretty(&input).map_err(|e| e.to_string())?;
    println!("Sending Payload:\n{}", payload);

    let outcome = client.ensure_field(&secrets.objects.person, &field).await;
    print_outcome(&field.name, &outcome);

    Ok(())
}
