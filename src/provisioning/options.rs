use crate::provisioning::catalog::{ASSIGNED_REP_FIELD_NAME, assigned_rep_select};
use crate::twenty::fieldmetadata::{FieldOutcome, FieldType};
use crate::twenty::selectoption::{OptionValuePolicy, REP_PALETTE, SelectOption, build_options};
use crate::twenty::serviceclient::ServiceClient;

/// Which select field receives the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionTarget {
    /// Patch this field id directly.
    FieldId(String),
    /// Find the `assignedRep` select field, creating it on `object_id` if absent.
    Discover { object_id: String },
}

#[derive(Debug)]
pub enum SyncOutcome {
    /// The roster had no named members; nothing was written.
    NoMembers,
    Updated {
        field_id: String,
        options: Vec<SelectOption>,
    },
    Created {
        outcome: FieldOutcome,
        options: Vec<SelectOption>,
    },
}

/// Replace the rep select field's options with the current workspace roster.
pub async fn sync_rep_options(
    client: &ServiceClient,
    target: &OptionTarget,
    policy: OptionValuePolicy,
) -> Result<SyncOutcome, String> {
    let members = client.list_workspace_members().await?;
    log::info!("Found {} members.", members.len());

    if members.is_empty() {
        return Ok(SyncOutcome::NoMembers);
    }

    let options = build_options(members.iter().map(|m| m.full_name()), REP_PALETTE, policy);
    if options.is_empty() {
        log::warn!("No member has a name; leaving options untouched.");
        return Ok(SyncOutcome::NoMembers);
    }

    let field_id = match target {
        OptionTarget::FieldId(field_id) => field_id.clone(),
        OptionTarget::Discover { object_id } => match find_rep_select_field(client).await {
            Some(field_id) => field_id,
            None => {
                let field = assigned_rep_select(options.clone());
                let outcome = client.ensure_field(object_id, &field).await;
                if !matches!(outcome, FieldOutcome::AlreadyExists) {
                    return Ok(SyncOutcome::Created { outcome, options });
                }

                // The listing missed a field the server already has; patch it instead.
                find_rep_select_field(client).await.ok_or_else(|| {
                    format!(
                        "{} already exists but could not be listed; options were not synced",
                        ASSIGNED_REP_FIELD_NAME
                    )
                })?
            }
        },
    };

    client.update_field_options(&field_id, &options).await?;
    Ok(SyncOutcome::Updated { field_id, options })
}

async fn find_rep_select_field(client: &ServiceClient) -> Option<String> {
    let fields = match client.list_fields(None).await {
        Ok(fields) => fields,
        Err(e) => {
            log::warn!("Error fetching fields: {}", e);
            return None;
        }
    };

    fields
        .into_iter()
        .find(|f| f.name == ASSIGNED_REP_FIELD_NAME && f.field_type == Some(FieldType::Select))
        .map(|f| {
            log::info!("Found field: {}", f.id);
            f.id
        })
}
