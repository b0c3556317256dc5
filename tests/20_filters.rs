mod common;

use anyhow::Result;
use reqwest::StatusCode;

// Filter and body validation over real HTTP. Validation runs before any
// storage work, so these hold with or without a reachable Postgres.

#[tokio::test]
async fn jobs_unknown_filter_is_rejected_by_name() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/jobs?sort=salary", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("sort"), "message should name the key: {}", body);
    Ok(())
}

#[tokio::test]
async fn jobs_min_salary_must_be_numeric() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/jobs?minSalary=lots", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn jobs_min_salary_of_zero_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Non-positive bounds are invalid filter values
    let res = client
        .get(format!("{}/jobs?minSalary=0", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn companies_inverted_employee_range_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/companies?minEmployees=50&maxEmployees=1",
            server.base_url
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn companies_unknown_filters_are_all_named() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/companies?color=blue&size=9", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("color") && message.contains("size"), "{}", body);
    Ok(())
}

#[tokio::test]
async fn job_patch_with_unknown_field_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::token_for("admin", true);

    // The company association is immutable; the field is not even accepted
    let res = client
        .patch(format!("{}/jobs/1", server.base_url))
        .bearer_auth(token)
        .json(&serde_json::json!({ "companyHandle": "other" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn job_patch_with_no_fields_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::token_for("admin", true);

    let res = client
        .patch(format!("{}/jobs/1", server.base_url))
        .bearer_auth(token)
        .json(&serde_json::json!({}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn job_create_with_out_of_range_equity_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::token_for("admin", true);

    let res = client
        .post(format!("{}/jobs", server.base_url))
        .bearer_auth(token)
        .json(&serde_json::json!({
            "title": "Engineer",
            "companyHandle": "acme",
            "equity": "1.5"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
