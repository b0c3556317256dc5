use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::database::manager::{is_foreign_key_violation, DatabaseError, DatabaseManager};
use crate::database::models::job::Job;
use crate::database::sql::{self, SqlValue};
use crate::filter::query::JobFilter;
use crate::filter::where_clause::compile_job_filter;

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// API field names already match the storage columns for jobs; the map
/// stays explicit for parity with the other resources.
const JOB_UPDATE_COLUMNS: &[(&str, &str)] = &[];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobNew {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<BigDecimal>,
    pub company_handle: String,
}

/// Partial update; the company association and id are immutable, which
/// `deny_unknown_fields` enforces at the boundary.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobPatch {
    pub title: Option<String>,
    pub salary: Option<i32>,
    pub equity: Option<BigDecimal>,
}

pub async fn create(data: &JobNew) -> Result<Job, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let job = sqlx::query_as::<_, Job>(
        "INSERT INTO jobs (title, salary, equity, company_handle)
         VALUES ($1, $2, $3, $4)
         RETURNING id, title, salary, equity, company_handle",
    )
    .bind(&data.title)
    .bind(data.salary)
    .bind(&data.equity)
    .bind(&data.company_handle)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            DatabaseError::InvalidReference(format!("No company: {}", data.company_handle))
        } else {
            e.into()
        }
    })?;

    Ok(job)
}

/// All jobs ordered by id, optionally narrowed by a validated filter.
pub async fn find_all(filter: Option<&JobFilter>) -> Result<Vec<Job>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let jobs = match filter {
        Some(filter) => {
            let compiled = compile_job_filter(filter, 1);
            let statement = format!(
                "SELECT {} FROM jobs WHERE {} ORDER BY id",
                JOB_COLUMNS, compiled.query
            );

            let mut query = sqlx::query_as::<_, Job>(&statement);
            for value in compiled.params {
                query = sql::bind_value_as(query, value);
            }
            query.fetch_all(&pool).await?
        }
        None => {
            let statement = format!("SELECT {} FROM jobs ORDER BY id", JOB_COLUMNS);
            sqlx::query_as::<_, Job>(&statement).fetch_all(&pool).await?
        }
    };

    Ok(jobs)
}

pub async fn get(id: i32) -> Result<Job, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let statement = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
    sqlx::query_as::<_, Job>(&statement)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("No job with id: {}", id)))
}

/// Partial update over title/salary/equity. The SET clause is compiled
/// before any database work so an empty patch fails fast.
pub async fn update(id: i32, data: JobPatch) -> Result<Job, DatabaseError> {
    let mut fields: Vec<(String, SqlValue)> = Vec::new();
    if let Some(title) = data.title {
        fields.push(("title".to_string(), SqlValue::Text(title)));
    }
    if let Some(salary) = data.salary {
        fields.push(("salary".to_string(), SqlValue::Int(salary as i64)));
    }
    if let Some(equity) = data.equity {
        fields.push(("equity".to_string(), SqlValue::Decimal(equity)));
    }
    let update = sql::partial_update(fields, JOB_UPDATE_COLUMNS, 1)?;

    let pool = DatabaseManager::pool().await?;
    let statement = format!(
        "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
        update.set_clause,
        update.params.len() + 1,
        JOB_COLUMNS
    );

    let mut query = sqlx::query_as::<_, Job>(&statement);
    for value in update.params {
        query = sql::bind_value_as(query, value);
    }

    query
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("No job with id: {}", id)))
}

pub async fn remove(id: i32) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let deleted = sqlx::query("DELETE FROM jobs WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(&pool)
        .await?;

    if deleted.is_none() {
        return Err(DatabaseError::NotFound(format!("No job with id: {}", id)));
    }
    Ok(())
}
