use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Credentials for the live smoke tests.
#[derive(Debug, Deserialize)]
pub struct Secrets {
    pub base_url: String,
    pub api_key: String,
    /// Singular name of an object expected to exist, e.g. `person`.
    #[serde(default = "default_sample_object")]
    pub sample_object: String,
}

fn default_sample_object() -> String {
    "person".to_string()
}

pub fn load_secrets() -> Result<Secrets, String> {
    let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
    path.push("secrets.json");
    read_secrets(&path)
}

fn read_secrets(path: &PathBuf) -> Result<Secrets, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read secrets.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid secrets.json: {e}"))
}
