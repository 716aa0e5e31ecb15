mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use twenty_metadata_client::LogLevel;
use twenty_metadata_client::auth::apikey::decode_api_key;
use twenty_metadata_client::twenty::serviceclient::ServiceClient;

use config::load_secrets;

/// Provision custom fields, rep options and workflows in a Twenty workspace.
#[derive(Debug, Parser)]
#[command(name = "twenty-provisioner", version)]
struct Cli {
    /// Path to secrets.json (defaults to ./secrets.json, then the user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log request URLs and payloads.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add the studio dashboard fields to its three custom objects.
    StudioFields,
    /// Add the assignedToWorkspaceMemberId text field to Person.
    LeadAssignmentField,
    /// Create the assignedRep relation from Person to WorkspaceMember.
    AssignmentRelation {
        /// Do not create the inverse assignedLeads field.
        #[arg(long)]
        no_inverse: bool,
    },
    /// Rebuild the assignedRep select options from the workspace roster.
    SyncRepOptions {
        /// Store each rep's name verbatim instead of SCREAMING_SNAKE_CASE.
        #[arg(long)]
        natural: bool,
        /// Patch this field id instead of looking the field up.
        #[arg(long)]
        field_id: Option<String>,
    },
    /// Print the id, object and options of a field.
    FindField {
        #[arg(default_value = "assignedRep")]
        name: String,
    },
    /// List GraphQL fields of a type whose names match.
    InspectType {
        #[arg(default_value = "Person")]
        type_name: String,
        #[arg(long = "match", default_values = ["assign", "rep"])]
        needles: Vec<String>,
    },
    /// Create the "Auto-assign leads to uploader" workflow (left inactive).
    AutoAssignWorkflow,
    /// Replace a workflow version's steps with the assignedRep update step.
    UpdateWorkflowSteps {
        #[arg(long)]
        version_id: String,
    },
    /// Activate a workflow version.
    ActivateWorkflow {
        #[arg(long)]
        version_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let secrets = load_secrets(cli.config.as_deref())?;

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        secrets.log_level
    };

    env_logger::Builder::new()
        .filter_level(log_level.into())
        .parse_default_env()
        .init();

    report_api_key(&secrets.api_key);

    let client = ServiceClient::new(&secrets.base_url, &secrets.api_key, log_level);

    match cli.command {
        Command::StudioFields => commands::studio_fields::run(&client, &secrets).await,
        Command::LeadAssignmentField => commands::lead_assignment::run(&client).await,
        Command::AssignmentRelation { no_inverse } => {
            commands::relation::run(&client, &secrets, !no_inverse).await
        }
        Command::SyncRepOptions { natural, field_id } => {
            commands::rep_options::run(&client, &secrets, natural, field_id).await
        }
        Command::FindField { name } => commands::find_field::run(&client, &name).await,
        Command::InspectType { type_name, needles } => {
            commands::inspect::run(&client, &type_name, &needles).await
        }
        Command::AutoAssignWorkflow => commands::workflow::provision(&client).await,
        Command::UpdateWorkflowSteps { version_id } => {
            commands::workflow::update_steps(&client, &version_id).await
        }
        Command::ActivateWorkflow { version_id } => {
            commands::workflow::activate(&client, &version_id).await
        }
    }
}

fn report_api_key(api_key: &str) {
    let Ok(claims) = decode_api_key(api_key) else {
        return;
    };

    if let Some(workspace) = &claims.workspace_id {
        let issued = claims
            .issued_at()
            .map(|iat| iat.to_rfc3339())
            .unwrap_or_else(|| "unknown".to_string());
        log::info!("API key for workspace {} (issued {})", workspace, issued);
    }

    if claims.is_expired() {
        let when = claims
            .expires_at()
            .map(|exp| exp.to_rfc3339())
            .unwrap_or_default();
        log::warn!("API key expired at {}; requests will be rejected", when);
    }
}
