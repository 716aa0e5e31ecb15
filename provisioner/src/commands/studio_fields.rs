use twenty_metadata_client::provisioning::catalog::studio_field_groups;
use twenty_metadata_client::provisioning::fields::ensure_fields;
use twenty_metadata_client::twenty::serviceclient::ServiceClient;

use crate::commands::print_outcome;
use crate::config::Secrets;

pub async fn run(client: &ServiceClient, secrets: &Secrets) -> Result<(), String> {
    let mut failed = 0;

    for group in studio_field_groups(&secrets.objects) {
        println!("\n=== Adding fields to {} ===", group.title);

        let report = ensure_fields(client, &group.object_id, &group.fields).await;
        for (name, outcome) in &report.outcomes {
            print_outcome(name, outcome);
        }
        println!(
            "  {} created, {} skipped, {} failed",
            report.created(),
            report.skipped(),
            report.failed()
        );
        failed += report.failed();
    }

    if failed == 0 {
        println!("\n[DONE] All fields added to Twenty CRM custom objects.");
    } else {
        println!("\n[DONE] Finished with {} failed field(s).", failed);
    }

    Ok(())
}
