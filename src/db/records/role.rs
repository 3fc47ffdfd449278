use serde::{Deserialize, Serialize};

use crate::db::store::TableRecord;

/// One row of `roles.csv`. Permissions are stored as a comma-separated
/// string of opaque tokens, e.g. `"manage_users, view_reports"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "RoleID")]
    pub role_id: u32,
    #[serde(rename = "RoleName")]
    pub role_name: String,
    #[serde(rename = "Permissions")]
    pub permissions: String,
}

impl Role {
    pub fn permission_list(&self) -> Vec<&str> {
        self.permissions
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Exact, case-sensitive membership test.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permission_list().contains(&permission)
    }
}

impl TableRecord for Role {
    const TABLE: &'static str = "roles";

    fn id(&self) -> u32 {
        self.role_id
    }
}
