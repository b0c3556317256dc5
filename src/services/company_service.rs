use serde::Deserialize;

use crate::database::manager::{is_unique_violation, DatabaseError, DatabaseManager};
use crate::database::models::company::Company;
use crate::database::sql::{self, SqlValue};
use crate::filter::query::CompanyFilter;
use crate::filter::where_clause::compile_company_filter;

const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

const COMPANY_UPDATE_COLUMNS: &[(&str, &str)] = &[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyNew {
    pub handle: String,
    pub name: String,
    pub description: Option<String>,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// Partial update; the handle is immutable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

pub async fn create(data: &CompanyNew) -> Result<Company, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let company = sqlx::query_as::<_, Company>(
        "INSERT INTO companies (handle, name, description, num_employees, logo_url)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING handle, name, description, num_employees, logo_url",
    )
    .bind(&data.handle)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.num_employees)
    .bind(&data.logo_url)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            DatabaseError::Conflict(format!("Duplicate company: {}", data.handle))
        } else {
            e.into()
        }
    })?;

    Ok(company)
}

/// All companies ordered by name, optionally narrowed by a validated filter.
pub async fn find_all(filter: Option<&CompanyFilter>) -> Result<Vec<Company>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let companies = match filter {
        Some(filter) => {
            let compiled = compile_company_filter(filter, 1);
            let statement = format!(
                "SELECT {} FROM companies WHERE {} ORDER BY name",
                COMPANY_COLUMNS, compiled.query
            );

            let mut query = sqlx::query_as::<_, Company>(&statement);
            for value in compiled.params {
                query = sql::bind_value_as(query, value);
            }
            query.fetch_all(&pool).await?
        }
        None => {
            let statement = format!("SELECT {} FROM companies ORDER BY name", COMPANY_COLUMNS);
            sqlx::query_as::<_, Company>(&statement)
                .fetch_all(&pool)
                .await?
        }
    };

    Ok(companies)
}

pub async fn get(handle: &str) -> Result<Company, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let statement = format!("SELECT {} FROM companies WHERE handle = $1", COMPANY_COLUMNS);
    sqlx::query_as::<_, Company>(&statement)
        .bind(handle)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("No company: {}", handle)))
}

pub async fn update(handle: &str, data: CompanyPatch) -> Result<Company, DatabaseError> {
    let mut fields: Vec<(String, SqlValue)> = Vec::new();
    if let Some(name) = data.name {
        fields.push(("name".to_string(), SqlValue::Text(name)));
    }
    if let Some(description) = data.description {
        fields.push(("description".to_string(), SqlValue::Text(description)));
    }
    if let Some(num_employees) = data.num_employees {
        fields.push(("numEmployees".to_string(), SqlValue::Int(num_employees as i64)));
    }
    if let Some(logo_url) = data.logo_url {
        fields.push(("logoUrl".to_string(), SqlValue::Text(logo_url)));
    }
    let update = sql::partial_update(fields, COMPANY_UPDATE_COLUMNS, 1)?;

    let pool = DatabaseManager::pool().await?;
    let statement = format!(
        "UPDATE companies SET {} WHERE handle = ${} RETURNING {}",
        update.set_clause,
        update.params.len() + 1,
        COMPANY_COLUMNS
    );

    let mut query = sqlx::query_as::<_, Company>(&statement);
    for value in update.params {
        query = sql::bind_value_as(query, value);
    }

    query
        .bind(handle)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("No company: {}", handle)))
}

pub async fn remove(handle: &str) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let deleted = sqlx::query("DELETE FROM companies WHERE handle = $1 RETURNING handle")
        .bind(handle)
        .fetch_optional(&pool)
        .await?;

    if deleted.is_none() {
        return Err(DatabaseError::NotFound(format!("No company: {}", handle)));
    }
    Ok(())
}
