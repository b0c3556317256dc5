use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::services::user_service::{self, UserNew};

use super::super::users::validate_user_new;

/// Self-service signup payload. No admin flag here; accounts created this
/// way are always non-admin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// POST /auth/register - create a non-admin account, 201 with `{ token }`.
pub async fn register(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    let data: RegisterRequest =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let data = UserNew {
        username: data.username,
        password: data.password,
        first_name: data.first_name,
        last_name: data.last_name,
        email: data.email,
        is_admin: false,
    };
    validate_user_new(&data)?;

    let user = user_service::create(&data).await?;

    let claims = Claims::new(user.username, user.is_admin);
    let token = auth::generate_jwt(&claims)?;

    Ok((StatusCode::CREATED, Json(json!({ "token": token }))))
}
