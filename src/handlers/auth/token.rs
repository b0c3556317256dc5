use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::services::user_service;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/token - exchange a username/password for a signed token.
pub async fn token(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    let data: TokenRequest =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let user = user_service::authenticate(&data.username, &data.password).await?;

    let claims = Claims::new(user.username, user.is_admin);
    let token = auth::generate_jwt(&claims)?;

    Ok(Json(json!({ "token": token })))
}
