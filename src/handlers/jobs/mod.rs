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
use bigdecimal::BigDecimal;

use crate::error::ApiError;
use crate::middleware::require_admin;
use crate::services::job_service::{JobNew, JobPatch};

pub fn routes() -> Router {
    let public = Router::new()
        .route("/jobs", get(list::list))
        .route("/jobs/:id", get(show::show));

    let admin = Router::new()
        .route("/jobs", post(create::create))
        .route("/jobs/:id", patch(update::update).delete(delete::delete))
        .route_layer(from_fn(require_admin));

    public.merge(admin)
}

pub(crate) fn validate_job_new(data: &JobNew) -> Result<(), ApiError> {
    if data.title.trim().is_empty() {
        return Err(ApiError::bad_request("title must not be empty"));
    }
    if data.company_handle.trim().is_empty() {
        return Err(ApiError::bad_request("companyHandle must not be empty"));
    }
    validate_job_fields(data.salary, data.equity.as_ref())
}

pub(crate) fn validate_job_patch(data: &JobPatch) -> Result<(), ApiError> {
    if let Some(title) = &data.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("title must not be empty"));
        }
    }
    validate_job_fields(data.salary, data.equity.as_ref())
}

fn validate_job_fields(salary: Option<i32>, equity: Option<&BigDecimal>) -> Result<(), ApiError> {
    if let Some(salary) = salary {
        if salary < 0 {
            return Err(ApiError::bad_request("salary must not be negative"));
        }
    }
    if let Some(equity) = equity {
        if *equity < BigDecimal::from(0) || *equity > BigDecimal::from(1) {
            return Err(ApiError::bad_request("equity must be between 0 and 1"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn new_job(title: &str, salary: Option<i32>, equity: Option<&str>) -> JobNew {
        JobNew {
            title: title.to_string(),
            salary,
            equity: equity.map(|e| BigDecimal::from_str(e).unwrap()),
            company_handle: "acme".to_string(),
        }
    }

    #[test]
    fn equity_outside_unit_interval_is_rejected() {
        assert!(validate_job_new(&new_job("Engineer", None, Some("1.01"))).is_err());
        assert!(validate_job_new(&new_job("Engineer", None, Some("-0.1"))).is_err());
        assert!(validate_job_new(&new_job("Engineer", None, Some("0"))).is_ok());
        assert!(validate_job_new(&new_job("Engineer", None, Some("1"))).is_ok());
    }

    #[test]
    fn negative_salary_is_rejected() {
        assert!(validate_job_new(&new_job("Engineer", Some(-1), None)).is_err());
        assert!(validate_job_new(&new_job("Engineer", Some(0), None)).is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(validate_job_new(&new_job("  ", None, None)).is_err());
    }
}
