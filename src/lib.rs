/// API key inspection for the static Twenty bearer token.
pub mod auth;
/// Idempotent provisioning routines built on the service client.
pub mod provisioning;
/// Twenty-specific types and service client helpers.
pub mod twenty;

/// Logging verbosity for SDK operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Emit verbose debug output, including request payloads.
    Debug,
    /// Emit standard informational output.
    Information,
}

impl Default for LogLevel {
    /// Defaults to `Information` logging.
    fn default() -> Self {
        LogLevel::Information
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Information => log::LevelFilter::Info,
        }
    }
}
