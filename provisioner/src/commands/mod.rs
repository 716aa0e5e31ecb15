pub mod find_field;
pub mod inspect;
pub mod lead_assignment;
pub mod relation;
pub mod rep_options;
pub mod studio_fields;
pub mod workflow;

use twenty_metadata_client::twenty::fieldmetadata::FieldOutcome;

/// Print one line per field outcome.
pub fn print_outcome(name: &str, outcome: &FieldOutcome) {
    match outcome {
        FieldOutcome::Created(created) => {
            let created_name = created.as_ref().map(|f| f.name.as_str()).unwrap_or("unknown");
            println!("  [OK] Created: {}", created_name);
        }
        FieldOutcome::AlreadyExists => println!("  - Skipped (exists): {}", name),
        FieldOutcome::Failed(detail) => println!("  [FAIL] Failed: {} - {}", name, detail),
    }
}
