//! Shared state and the health endpoint.

use axum::{http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

use crate::auth::JwtSecret;
use crate::db::UserStore;

/// Shared application state for every request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, jwt_secret: JwtSecret) -> Self {
        Self { users, jwt_secret }
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }
    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "accounts" })),
    )
}
