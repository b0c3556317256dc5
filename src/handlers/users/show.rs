use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::services::user_service;

/// GET /users/:username - show an account (admin or the account itself).
pub async fn show(Path(username): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let user = user_service::get(&username).await?;
    Ok(Json(json!({ "user": user })))
}
