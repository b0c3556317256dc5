use axum::{response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::services::user_service;

/// GET /users - list accounts (admin only).
pub async fn list() -> Result<impl IntoResponse, ApiError> {
    let users = user_service::find_all().await?;
    Ok(Json(json!({ "users": users })))
}
