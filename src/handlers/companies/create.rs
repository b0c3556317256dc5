use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::company_service::{self, CompanyNew};

use super::validate_company_new;

/// POST /companies - create a company (admin only), 201 with `{ company }`.
pub async fn create(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    let data: CompanyNew =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    validate_company_new(&data)?;

    let company = company_service::create(&data).await?;

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}
