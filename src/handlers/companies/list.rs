use std::collections::HashMap;

use axum::{extract::Query, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::filter::query::CompanyFilter;
use crate::services::company_service;

/// GET /companies - list companies, optionally narrowed by
/// name/minEmployees/maxEmployees. Filter validation happens before any
/// database work.
pub async fn list(
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = CompanyFilter::from_query(params)?;
    let companies = company_service::find_all(filter.as_ref()).await?;

    Ok(Json(json!({ "companies": companies })))
}
