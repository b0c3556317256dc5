use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::services::company_service;

/// GET /companies/:handle - show a single company.
pub async fn show(Path(handle): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let company = company_service::get(&handle).await?;
    Ok(Json(json!({ "company": company })))
}
