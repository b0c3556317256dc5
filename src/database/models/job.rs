use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    /// Ownership share in [0, 1]. NUMERIC in storage, decimal string on the
    /// wire.
    pub equity: Option<BigDecimal>,
    pub company_handle: String,
}
