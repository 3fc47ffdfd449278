use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};

use super::SessionClaims;
use crate::{
    db::User,
    error::AppError,
    state::{AppState, JwtKeys},
};

const SESSION_TTL_SECS: usize = 60 * 60; // 1 hour

pub fn now_unix() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

pub fn make_session_claims(user: &User) -> SessionClaims {
    let iat = now_unix();
    SessionClaims {
        user_id: user.user_id,
        username: user.username.clone(),
        role_id: user.role_id,
        iat,
        exp: iat + SESSION_TTL_SECS,
    }
}

pub fn encode_session(keys: &JwtKeys, claims: &SessionClaims) -> Result<String, AppError> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".into());

    encode(&header, claims, &keys.enc).map_err(|_| AppError::internal("Token encoding failed"))
}

/// Middleware gating every dashboard route: decode the bearer token and
/// stash the claims in request extensions for extractors and layers.
pub async fn session_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::unauthorized("Missing/invalid Authorization header").into_response()
    })?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<SessionClaims>(token, &state.jwt.dec, &validation)
        .map_err(|_| AppError::unauthorized("Invalid or expired session").into_response())?;

    req.extensions_mut().insert(data.claims);

    Ok(next.run(req).await)
}
