use serde::Deserialize;

use crate::auth;
use crate::database::manager::{is_unique_violation, DatabaseError, DatabaseManager};
use crate::database::models::user::User;
use crate::database::sql::{self, SqlValue};

const USER_COLUMNS: &str = "username, first_name, last_name, email, is_admin";

/// The `password` API field lands in `password_hash` after hashing; the
/// other names translate from camelCase.
const USER_UPDATE_COLUMNS: &[(&str, &str)] = &[
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("password", "password_hash"),
];

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Invalid username/password")]
    InvalidCredentials,

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserNew {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Insert an account with a freshly hashed password.
pub async fn create(data: &UserNew) -> Result<User, UserError> {
    let password_hash = auth::hash_password(&data.password)?;
    let pool = DatabaseManager::pool().await.map_err(UserError::Database)?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash, first_name, last_name, email, is_admin)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING username, first_name, last_name, email, is_admin",
    )
    .bind(&data.username)
    .bind(&password_hash)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(data.is_admin)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            DatabaseError::Conflict(format!("Duplicate username: {}", data.username))
        } else {
            DatabaseError::from(e)
        }
    })?;

    Ok(user)
}

/// Check a username/password pair. The same error covers a missing account
/// and a wrong password so responses don't reveal which usernames exist.
pub async fn authenticate(username: &str, password: &str) -> Result<User, UserError> {
    let pool = DatabaseManager::pool().await.map_err(UserError::Database)?;

    let row: Option<(String, String, String, String, bool, String)> = sqlx::query_as(
        "SELECT username, first_name, last_name, email, is_admin, password_hash
         FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(&pool)
    .await
    .map_err(DatabaseError::from)?;

    let (username, first_name, last_name, email, is_admin, password_hash) =
        row.ok_or(UserError::InvalidCredentials)?;

    if !auth::verify_password(password, &password_hash) {
        return Err(UserError::InvalidCredentials);
    }

    Ok(User {
        username,
        first_name,
        last_name,
        email,
        is_admin,
    })
}

pub async fn find_all() -> Result<Vec<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let statement = format!("SELECT {} FROM users ORDER BY username", USER_COLUMNS);
    let users = sqlx::query_as::<_, User>(&statement).fetch_all(&pool).await?;
    Ok(users)
}

pub async fn get(username: &str) -> Result<User, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let statement = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
    sqlx::query_as::<_, User>(&statement)
        .bind(username)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("No user: {}", username)))
}

/// Partial update; a supplied password is rehashed before it is stored.
pub async fn update(username: &str, data: UserPatch) -> Result<User, UserError> {
    let mut fields: Vec<(String, SqlValue)> = Vec::new();
    if let Some(first_name) = data.first_name {
        fields.push(("firstName".to_string(), SqlValue::Text(first_name)));
    }
    if let Some(last_name) = data.last_name {
        fields.push(("lastName".to_string(), SqlValue::Text(last_name)));
    }
    if let Some(email) = data.email {
        fields.push(("email".to_string(), SqlValue::Text(email)));
    }
    if let Some(password) = data.password {
        let password_hash = auth::hash_password(&password)?;
        fields.push(("password".to_string(), SqlValue::Text(password_hash)));
    }
    let update =
        sql::partial_update(fields, USER_UPDATE_COLUMNS, 1).map_err(DatabaseError::from)?;

    let pool = DatabaseManager::pool().await.map_err(UserError::Database)?;
    let statement = format!(
        "UPDATE users SET {} WHERE username = ${} RETURNING {}",
        update.set_clause,
        update.params.len() + 1,
        USER_COLUMNS
    );

    let mut query = sqlx::query_as::<_, User>(&statement);
    for value in update.params {
        query = sql::bind_value_as(query, value);
    }

    let user = query
        .bind(username)
        .fetch_optional(&pool)
        .await
        .map_err(DatabaseError::from)?
        .ok_or_else(|| DatabaseError::NotFound(format!("No user: {}", username)))?;

    Ok(user)
}

pub async fn remove(username: &str) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let deleted = sqlx::query("DELETE FROM users WHERE username = $1 RETURNING username")
        .bind(username)
        .fetch_optional(&pool)
        .await?;

    if deleted.is_none() {
        return Err(DatabaseError::NotFound(format!("No user: {}", username)));
    }
    Ok(())
}
