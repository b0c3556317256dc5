use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::job_service::{self, JobPatch};

use super::validate_job_patch;

/// PATCH /jobs/:id - partial update of title/salary/equity (admin only).
pub async fn update(
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let data: JobPatch =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    validate_job_patch(&data)?;

    let job = job_service::update(id, data).await?;

    Ok(Json(json!({ "job": job })))
}
