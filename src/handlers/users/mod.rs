pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::middleware::{require_admin, require_admin_or_self};
use crate::services::user_service::{UserNew, UserPatch};

const MIN_PASSWORD_LENGTH: usize = 8;

pub fn routes() -> Router {
    let admin = Router::new()
        .route("/users", get(list::list).post(create::create))
        .route_layer(from_fn(require_admin));

    let owned = Router::new()
        .route(
            "/users/:username",
            get(show::show).patch(update::update).delete(delete::delete),
        )
        .route_layer(from_fn(require_admin_or_self));

    admin.merge(owned)
}

pub(crate) fn validate_user_new(data: &UserNew) -> Result<(), ApiError> {
    if data.username.trim().is_empty() {
        return Err(ApiError::bad_request("username must not be empty"));
    }
    validate_password(&data.password)?;
    validate_email(&data.email)
}

pub(crate) fn validate_user_patch(data: &UserPatch) -> Result<(), ApiError> {
    if let Some(password) = &data.password {
        validate_password(password)?;
    }
    if let Some(email) = &data.email {
        validate_email(email)?;
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::bad_request(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ApiError> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(ApiError::bad_request("invalid email format"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_is_rejected() {
        assert!(validate_password("2short").is_err());
        assert!(validate_password("longenough").is_ok());
    }

    #[test]
    fn email_needs_one_at_sign_with_both_sides() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("userexample.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }
}
