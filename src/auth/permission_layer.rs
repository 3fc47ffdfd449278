use std::{
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use tower::{Layer, Service};

use super::SessionClaims;
use crate::{error::AppError, state::AppState};

/// Gates a route on a role permission resolved from the role store, e.g.
/// `RequirePermissionLayer::new(state, "manage_users")`. Expects session
/// claims already decoded into request extensions.
#[derive(Clone)]
pub struct RequirePermissionLayer {
    state: Arc<AppState>,
    required: &'static str,
}

impl RequirePermissionLayer {
    pub fn new(state: Arc<AppState>, required: &'static str) -> Self {
        Self { state, required }
    }
}

#[derive(Clone)]
pub struct RequirePermission<S> {
    inner: S,
    state: Arc<AppState>,
    required: &'static str,
}

impl<S> Layer<S> for RequirePermissionLayer {
    type Service = RequirePermission<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequirePermission {
            inner,
            state: Arc::clone(&self.state),
            required: self.required,
        }
    }
}

impl<S> Service<Request<Body>> for RequirePermission<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let state = Arc::clone(&self.state);
        let required = self.required;

        // tower Services are allowed to be called concurrently, so clone inner
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let role_id = match req.extensions().get::<SessionClaims>() {
                Some(claims) => claims.role_id,
                None => {
                    return Ok(AppError::unauthorized("No session in request").into_response());
                }
            };

            if !state.auth.check_permission(role_id, required) {
                return Ok(AppError::forbidden("Missing required permission").into_response());
            }

            inner.call(req).await
        })
    }
}
