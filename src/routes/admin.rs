use std::sync::Arc;

use axum::{Json, Router, extract::State, middleware, routing::get};
use serde::Serialize;

use crate::{
    auth::{jwt::session_auth, permission_layer::RequirePermissionLayer},
    db::records::UserView,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin/users", get(admin_users))
        .layer(RequirePermissionLayer::new(state.clone(), "manage_users"))
        .route_layer(middleware::from_fn_with_state(state.clone(), session_auth))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct AdminUser {
    #[serde(flatten)]
    user: UserView,
    role_name: String,
}

async fn admin_users(State(state): State<Arc<AppState>>) -> Json<Vec<AdminUser>> {
    let users = state.auth.all_users();
    let listing = users
        .iter()
        .map(|user| AdminUser {
            user: UserView::from(user),
            role_name: state
                .auth
                .role(user.role_id)
                .map(|role| role.role_name)
                .unwrap_or_else(|| "Unknown".to_string()),
        })
        .collect();
    Json(listing)
}
