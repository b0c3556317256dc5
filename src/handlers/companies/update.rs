use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::company_service::{self, CompanyPatch};

use super::validate_company_patch;

/// PATCH /companies/:handle - partial update (admin only). The handle
/// itself is immutable.
pub async fn update(
    Path(handle): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let data: CompanyPatch =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    validate_company_patch(&data)?;

    let company = company_service::update(&handle, data).await?;

    Ok(Json(json!({ "company": company })))
}
