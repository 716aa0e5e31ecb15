use serde::{Deserialize, Serialize};

/// Query listing every workspace member with their name.
pub const WORKSPACE_MEMBERS_QUERY: &str = r#"
query GetMembers {
    workspaceMembers {
        edges {
            node {
                id
                name {
                    firstName
                    lastName
                }
            }
        }
    }
}
"#;

/// A `FULL_NAME` composite value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// A member of the Twenty workspace (a system user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceMember {
    pub id: String,
    #[serde(default)]
    pub name: FullName,
}

impl WorkspaceMember {
    /// `"{first} {last}"` with the ends trimmed; empty when both parts are missing.
    pub fn full_name(&self) -> String {
        let first = self.name.first_name.as_deref().unwrap_or_default();
        let last = self.name.last_name.as_deref().unwrap_or_default();
        format!("{} {}", first, last).trim().to_string()
    }
}
