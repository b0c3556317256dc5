use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::user_service::{self, UserPatch};

use super::validate_user_patch;

/// PATCH /users/:username - partial update (admin or the account itself).
/// The admin flag and username cannot be changed here.
pub async fn update(
    Path(username): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let data: UserPatch =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    validate_user_patch(&data)?;

    let user = user_service::update(&username, data).await?;

    Ok(Json(json!({ "user": user })))
}
