use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::services::company_service;

/// DELETE /companies/:handle - remove a company (admin only),
/// `{ deleted: handle }`.
pub async fn delete(Path(handle): Path<String>) -> Result<impl IntoResponse, ApiError> {
    company_service::remove(&handle).await?;
    Ok(Json(json!({ "deleted": handle })))
}
