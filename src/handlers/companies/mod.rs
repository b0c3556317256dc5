pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

use axum::{
    middleware::from_fn,
    routing::{get, patch, post},
    Router,
};

use crate::error::ApiError;
use crate::middleware::require_admin;
use crate::services::company_service::{CompanyNew, CompanyPatch};

pub fn routes() -> Router {
    let public = Router::new()
        .route("/companies", get(list::list))
        .route("/companies/:handle", get(show::show));

    let admin = Router::new()
        .route("/companies", post(create::create))
        .route(
            "/companies/:handle",
            patch(update::update).delete(delete::delete),
        )
        .route_layer(from_fn(require_admin));

    public.merge(admin)
}

pub(crate) fn validate_company_new(data: &CompanyNew) -> Result<(), ApiError> {
    if data.handle.trim().is_empty() {
        return Err(ApiError::bad_request("handle must not be empty"));
    }
    if data.name.trim().is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    validate_company_fields(data.num_employees)
}

pub(crate) fn validate_company_patch(data: &CompanyPatch) -> Result<(), ApiError> {
    if let Some(name) = &data.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("name must not be empty"));
        }
    }
    validate_company_fields(data.num_employees)
}

fn validate_company_fields(num_employees: Option<i32>) -> Result<(), ApiError> {
    if let Some(num_employees) = num_employees {
        if num_employees < 0 {
            return Err(ApiError::bad_request("numEmployees must not be negative"));
        }
    }
    Ok(())
}
