use crate::{
    auth::password::verify_password,
    db::{CsvStore, Role, User},
};

/// Credential and permission checks against the user/role tables.
///
/// Misses are values, never errors: an unknown username and a wrong
/// password collapse into the same `None` so callers cannot leak which
/// input was wrong.
#[derive(Debug, Clone)]
pub struct AuthService {
    store: CsvStore,
}

impl AuthService {
    pub fn new(store: CsvStore) -> Self {
        Self { store }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        let user = match self.store.find_by(|u: &User| u.username == username) {
            Some(user) => user,
            None => {
                tracing::debug!("authentication rejected");
                return None;
            }
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => Some(user),
            // wrong password and an unparseable stored hash both read as a
            // plain rejection
            _ => {
                tracing::debug!("authentication rejected");
                None
            }
        }
    }

    pub fn role(&self, role_id: u32) -> Option<Role> {
        self.store.find_by_id(role_id)
    }

    /// False when the role is unknown, else an exact membership test.
    pub fn check_permission(&self, role_id: u32, permission: &str) -> bool {
        self.role(role_id)
            .is_some_and(|role| role.has_permission(permission))
    }

    /// Structural check on session data: the keys a logged-in session must
    /// carry. Does not re-verify the password.
    pub fn validate_session(session: &serde_json::Value) -> bool {
        ["user_id", "username", "role_id"]
            .iter()
            .all(|key| session.get(key).is_some())
    }

    /// Full user listing for the admin page. Callers are responsible for
    /// gating on the `manage_users` permission.
    pub fn all_users(&self) -> Vec<User> {
        self.store.load_all()
    }
}
