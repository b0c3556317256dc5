//! Helpers for statements assembled at runtime: dynamically chosen bind
//! values and the partial-update `SET` compiler.

use bigdecimal::BigDecimal;
use sqlx::postgres::PgArguments;
use thiserror::Error;

/// A bind value whose type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
    Decimal(BigDecimal),
}

#[derive(Debug, Error)]
pub enum SqlBuildError {
    #[error("No data to update")]
    EmptyUpdate,
}

/// Compiled partial-update plan: a `SET` clause and the values bound to its
/// placeholders. Clause `k` binds `params[k - 1]`.
#[derive(Debug, Clone)]
pub struct UpdateSet {
    pub set_clause: String,
    pub params: Vec<SqlValue>,
}

/// Build `"col"=$1, "col2"=$2, ...` from the supplied fields, in input
/// order. `columns` maps API field names to storage column names; fields
/// absent from the map keep their name unchanged. Placeholders start at
/// `first_index` so callers can append their own (typically the `WHERE`
/// key).
pub fn partial_update(
    fields: Vec<(String, SqlValue)>,
    columns: &[(&str, &str)],
    first_index: usize,
) -> Result<UpdateSet, SqlBuildError> {
    if fields.is_empty() {
        return Err(SqlBuildError::EmptyUpdate);
    }

    let mut clauses = Vec::with_capacity(fields.len());
    let mut params = Vec::with_capacity(fields.len());
    for (position, (field, value)) in fields.into_iter().enumerate() {
        let column = columns
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
            .unwrap_or(field.as_str());
        clauses.push(format!("\"{}\"=${}", column, first_index + position));
        params.push(value);
    }

    Ok(UpdateSet {
        set_clause: clauses.join(", "),
        params,
    })
}

pub fn bind_value(
    query: sqlx::query::Query<'_, sqlx::Postgres, PgArguments>,
    value: SqlValue,
) -> sqlx::query::Query<'_, sqlx::Postgres, PgArguments> {
    match value {
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Decimal(d) => query.bind(d),
    }
}

pub fn bind_value_as<'q, O>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    value: SqlValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>,
{
    match value {
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Decimal(d) => query.bind(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SqlValue {
        SqlValue::Text(s.to_string())
    }

    #[test]
    fn clauses_and_values_stay_aligned() {
        let update = partial_update(
            vec![
                ("firstName".to_string(), text("Aliya")),
                ("age".to_string(), SqlValue::Int(32)),
            ],
            &[("firstName", "first_name")],
            1,
        )
        .unwrap();

        assert_eq!(update.set_clause, "\"first_name\"=$1, \"age\"=$2");
        assert_eq!(update.params, vec![text("Aliya"), SqlValue::Int(32)]);
    }

    #[test]
    fn unmapped_fields_keep_their_name() {
        let update = partial_update(vec![("title".to_string(), text("Engineer"))], &[], 1).unwrap();

        assert_eq!(update.set_clause, "\"title\"=$1");
    }

    #[test]
    fn placeholders_start_at_the_requested_index() {
        let update = partial_update(
            vec![
                ("a".to_string(), SqlValue::Int(1)),
                ("b".to_string(), SqlValue::Int(2)),
            ],
            &[],
            5,
        )
        .unwrap();

        assert_eq!(update.set_clause, "\"a\"=$5, \"b\"=$6");
    }

    #[test]
    fn empty_input_is_an_error_not_an_empty_clause() {
        let err = partial_update(vec![], &[], 1).unwrap_err();
        assert!(matches!(err, SqlBuildError::EmptyUpdate));
    }

    #[test]
    fn clause_count_always_matches_value_count() {
        let update = partial_update(
            vec![
                ("x".to_string(), SqlValue::Int(1)),
                ("y".to_string(), text("two")),
                ("z".to_string(), SqlValue::Int(3)),
            ],
            &[],
            1,
        )
        .unwrap();

        assert_eq!(update.set_clause.matches('=').count(), update.params.len());
    }
}
