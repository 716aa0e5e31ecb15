use twenty_metadata_client::provisioning::catalog::ObjectIds;
use twenty_metadata_client::provisioning::options::{OptionTarget, SyncOutcome, sync_rep_options};
use twenty_metadata_client::twenty::selectoption::OptionValuePolicy;
use twenty_metadata_client::twenty::serviceclient::ServiceClient;

use crate::commands::print_outcome;
use crate::config::Secrets;

pub async fn run(
    client: &ServiceClient,
    secrets: &Secrets,
    natural: bool,
    field_id: Option<String>,
) -> Result<(), String> {
    let policy = if natural {
        OptionValuePolicy::NaturalName
    } else {
        OptionValuePolicy::ScreamingSnake
    };

    let target = target_for(natural, field_id, &secrets.objects);

    println!("Fetching Workspace Members...");
    let outcome = match sync_rep_options(client, &target, policy).await {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("[FAIL] {}", e);
            return Ok(());
        }
    };

    match outcome {
        SyncOutcome::NoMembers => println!("No workspace members found; nothing to sync."),
        SyncOutcome::Updated { field_id, options } => {
            println!("\nNew options:");
            for option in &options {
                println!("  {} -> {}", option.label, option.value);
            }
            println!(
                "\n[SUCCESS] Field {} updated with {} options.",
                field_id,
                options.len()
            );
        }
        SyncOutcome::Created { outcome, options } => {
            println!("Creating 'Assigned Rep' SELECT field with {} options...", options.len());
            print_outcome("assignedRep", &outcome);
        }
    }

    Ok(())
}

/// An explicit `--field-id` wins. `--natural` reproduces the verbatim-name
/// sync, which always patched the configured field id; the default discovers
/// the field by name.
fn target_for(natural: bool, field_id: Option<String>, objects: &ObjectIds) -> OptionTarget {
    match field_id {
        Some(field_id) => OptionTarget::FieldId(field_id),
        None if natural => OptionTarget::FieldId(objects.assigned_rep_field.clone()),
        None => OptionTarget::Discover {
            object_id: objects.person.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_field_id_wins_over_both_modes() {
        let objects = ObjectIds::default();
        for natural in [false, true] {
            let target = target_for(natural, Some("given".to_string()), &objects);
            assert_eq!(target, OptionTarget::FieldId("given".to_string()));
        }
    }

    #[test]
    fn natural_mode_falls_back_to_configured_field() {
        let objects = ObjectIds {
            assigned_rep_field: "configured-field".to_string(),
            ..ObjectIds::default()
        };
        let target = target_for(true, None, &objects);
        assert_eq!(target, OptionTarget::FieldId("configured-field".to_string()));
    }

    #[test]
    fn default_mode_discovers_on_person() {
        let objects = ObjectIds {
            person: "person-obj".to_string(),
            ..ObjectIds::default()
        };
        let target = target_for(false, None, &objects);
        assert_eq!(
            target,
            OptionTarget::Discover {
                object_id: "person-obj".to_string()
            }
        );
    }
}
