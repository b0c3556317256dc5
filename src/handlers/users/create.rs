use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::user_service::{self, UserNew};

use super::validate_user_new;

/// POST /users - create an account (admin only; this is the only way to
/// mint another admin), 201 with `{ user }`.
pub async fn create(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    let data: UserNew =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    validate_user_new(&data)?;

    let user = user_service::create(&data).await?;

    Ok((StatusCode::CREATED, Json(json!({ "user": user }))))
}
