use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use crate::{
    auth::jwt::{encode_session, make_session_claims},
    error::AppError,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, serde::Serialize)]
pub struct LoginResponse {
    access_token: String,
    token_type: &'static str,
    username: String,
    role_name: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/login", post(login)).with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // One generic denial for unknown user and wrong password alike.
    let user = state
        .auth
        .authenticate(&body.username, &body.password)
        .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

    let role_name = state
        .auth
        .role(user.role_id)
        .map(|role| role.role_name)
        .unwrap_or_else(|| "Unknown".to_string());

    let claims = make_session_claims(&user);
    let access_token = encode_session(&state.jwt, &claims)?;

    tracing::info!(username = %user.username, "login succeeded");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        username: user.username,
        role_name,
    }))
}
