pub mod jwt;
pub mod password;
pub mod permission_layer;

use axum::{extract::FromRequestParts, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Session state carried in the bearer token after a successful login.
/// Holds exactly what the dashboard needs to gate and label pages; the
/// password is never re-verified on later requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: u32,
    pub username: String,
    pub role_id: u32,
    pub iat: usize, // issued at (unix)
    pub exp: usize, // expiry (unix)
}

// Helper extractor: pull session claims from request extensions.
impl<S> FromRequestParts<S> for SessionClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .ok_or((StatusCode::UNAUTHORIZED, "No session in request"))
    }
}
