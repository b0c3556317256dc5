use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::job_service::{self, JobNew};

use super::validate_job_new;

/// POST /jobs - create a job (admin only), 201 with `{ job }`.
pub async fn create(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    let data: JobNew =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    validate_job_new(&data)?;

    let job = job_service::create(&data).await?;

    Ok((StatusCode::CREATED, Json(json!({ "job": job }))))
}
