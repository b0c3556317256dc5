use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::services::job_service;

/// DELETE /jobs/:id - remove a job (admin only), `{ deleted: id }`.
pub async fn delete(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    job_service::remove(id).await?;
    Ok(Json(json!({ "deleted": id })))
}
