use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::services::user_service;

/// DELETE /users/:username - remove an account (admin or the account
/// itself), `{ deleted: username }`.
pub async fn delete(Path(username): Path<String>) -> Result<impl IntoResponse, ApiError> {
    user_service::remove(&username).await?;
    Ok(Json(json!({ "deleted": username })))
}
