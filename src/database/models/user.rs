use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public shape of an account. The stored `password_hash` column is never
/// part of this model; authentication reads it separately.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}
