use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use twenty_metadata_client::LogLevel;
use twenty_metadata_client::provisioning::catalog::ObjectIds;

const SECRETS_FILE: &str = "secrets.json";
const CONFIG_DIR: &str = "twenty-provisioner";

#[derive(Debug, Deserialize)]
pub struct Secrets {
    pub base_url: String,
    pub api_key: String,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub objects: ObjectIds,
}

/// Load secrets from `explicit`, else `./secrets.json`, else the user config dir.
pub fn load_secrets(explicit: Option<&Path>) -> Result<Secrets, String> {
    if let Some(path) = explicit {
        return read_secrets(path);
    }

    let candidates = secrets_candidates()?;
    let path = candidates
        .iter()
        .find(|path| path.is_file())
        .ok_or_else(|| {
            let searched: Vec<String> = candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            format!("No secrets.json found (searched {})", searched.join(", "))
        })?;

    read_secrets(path)
}

fn secrets_candidates() -> Result<Vec<PathBuf>, String> {
    let mut cwd = std::env::current_dir().map_err(|e| e.to_string())?;
    cwd.push(SECRETS_FILE);

    let mut candidates = vec![cwd];
    if let Some(mut dir) = dirs::config_dir() {
        dir.push(CONFIG_DIR);
        dir.push(SECRETS_FILE);
        candidates.push(dir);
    }
    Ok(candidates)
}

fn read_secrets(path: &Path) -> Result<Secrets, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let secrets: Secrets =
        serde_json::from_str(&contents).map_err(|e| format!("Invalid secrets.json: {e}"))?;

    if secrets.api_key.trim().is_empty() {
        return Err("secrets.json has an empty api_key".to_string());
    }
    if secrets.base_url.trim().is_empty() {
        return Err("secrets.json has an empty base_url".to_string());
    }

    Ok(secrets)
}
