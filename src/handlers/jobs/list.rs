use std::collections::HashMap;

use axum::{extract::Query, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::filter::query::JobFilter;
use crate::services::job_service;

/// GET /jobs - list jobs, optionally narrowed by title/minSalary/hasEquity.
/// Filter validation happens before any database work.
pub async fn list(
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = JobFilter::from_query(params)?;
    let jobs = job_service::find_all(filter.as_ref()).await?;

    Ok(Json(json!({ "jobs": jobs })))
}
