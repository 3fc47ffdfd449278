use serde::{Deserialize, Serialize};

use crate::db::store::TableRecord;

/// One row of `users.csv`. Serialize is implemented so the offline
/// credential-migration tool can rewrite the table with the same headers;
/// the hash never leaves the process through the API (see [`UserView`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID")]
    pub user_id: u32,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "PasswordHash")]
    pub password_hash: String,
    #[serde(rename = "RoleID")]
    pub role_id: u32,
    #[serde(rename = "Email")]
    pub email: String,
}

impl TableRecord for User {
    const TABLE: &'static str = "users";

    fn id(&self) -> u32 {
        self.user_id
    }
}

/// Outward shape of a user: everything except the password hash.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub user_id: u32,
    pub username: String,
    pub role_id: u32,
    pub email: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            role_id: user.role_id,
            email: user.email.clone(),
        }
    }
}
