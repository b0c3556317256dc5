use axum::{response::IntoResponse, Extension, Json};
use serde_json::json;

use crate::middleware::Principal;

/// GET /auth/me - echo the authenticated principal.
pub async fn me(Extension(principal): Extension<Principal>) -> impl IntoResponse {
    Json(json!({
        "user": {
            "username": principal.username,
            "isAdmin": principal.is_admin,
        }
    }))
}
