use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::services::job_service;

/// GET /jobs/:id - show a single job.
pub async fn show(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    let job = job_service::get(id).await?;
    Ok(Json(json!({ "job": job })))
}
