//! Parameter binding and row extraction.
//!
//! Statements take positional parameters built with [`Parameters::bind`];
//! result rows are mapped to typed values through [`FromRow`]. Nullable
//! columns have dedicated readers because `row.get::<T>(idx)` on a NULL
//! column is an error, not a default.

use std::str::FromStr;

use libsql::params::Params;
use libsql::{Connection, Row, Rows, Value};
use proj_core::hours::normalize_hours;
use rust_decimal::Decimal;

use crate::error::DatabaseError;

/// A value that can be bound to a positional statement parameter.
///
/// `None` binds SQL NULL. Decimals bind as normalized text with two places.
pub trait SqlParam {
    fn to_value(&self) -> Value;
}

impl SqlParam for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl SqlParam for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl SqlParam for i32 {
    fn to_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }
}

impl SqlParam for i64 {
    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }
}

/// Values too large for two places bind unscaled; callers that persist hours
/// normalize first with [`normalize_hours`].
impl SqlParam for Decimal {
    fn to_value(&self) -> Value {
        Value::Text(normalize_hours(*self).unwrap_or(*self).to_string())
    }
}

impl<T: SqlParam> SqlParam for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, SqlParam::to_value)
    }
}

/// Positional statement parameters, 1-based like `?1`, `?2`, ...
///
/// Positions may be bound in any order. Gaps are bound as NULL.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    values: Vec<Value>,
}

impl Parameters {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Bind `value` at `position`, replacing any earlier binding there.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0.
    #[must_use]
    pub fn bind<P: SqlParam + ?Sized>(mut self, position: usize, value: &P) -> Self {
        assert!(position > 0, "statement parameters are 1-based");
        if self.values.len() < position {
            self.values.resize(position, Value::Null);
        }
        self.values[position - 1] = value.to_value();
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn into_params(self) -> Params {
        Params::Positional(self.values)
    }
}

/// Maps one result row to a value.
pub trait FromRow: Sized {
    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or holds an unreadable value.
    fn from_row(row: &Row) -> Result<Self, DatabaseError>;
}

/// Drain `rows`, mapping each one. An empty result yields an empty vector.
///
/// # Errors
///
/// Returns the first row read or mapping failure.
pub async fn extract_all<T: FromRow>(rows: &mut Rows) -> Result<Vec<T>, DatabaseError> {
    let mut items = Vec::new();
    while let Some(row) = rows.next().await? {
        items.push(T::from_row(&row)?);
    }
    Ok(items)
}

/// Map the first row of `rows`, if any.
///
/// # Errors
///
/// Returns the row read or mapping failure.
pub async fn extract_optional<T: FromRow>(rows: &mut Rows) -> Result<Option<T>, DatabaseError> {
    match rows.next().await? {
        Some(row) => Ok(Some(T::from_row(&row)?)),
        None => Ok(None),
    }
}

/// Run a statement that returns no rows. Yields the affected row count.
///
/// # Errors
///
/// Returns `DatabaseError::LibSql` if the statement fails.
pub async fn execute_statement(
    conn: &Connection,
    sql: &str,
    params: Parameters,
) -> Result<u64, DatabaseError> {
    Ok(conn.execute(sql, params.into_params()).await?)
}

/// Run a query and map every result row.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or a row mapping fails.
pub async fn query_all<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: Parameters,
) -> Result<Vec<T>, DatabaseError> {
    let mut rows = conn.query(sql, params.into_params()).await?;
    extract_all(&mut rows).await
}

/// Run a query and map the first result row, if any.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or the row mapping fails.
pub async fn query_optional<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: Parameters,
) -> Result<Option<T>, DatabaseError> {
    let mut rows = conn.query(sql, params.into_params()).await?;
    extract_optional(&mut rows).await
}

/// Run a query returning a single integer in the first column.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the query returns no rows.
pub async fn query_scalar(
    conn: &Connection,
    sql: &str,
    params: Parameters,
) -> Result<i64, DatabaseError> {
    let mut rows = conn.query(sql, params.into_params()).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

/// Id generated by the most recent insert on this connection.
///
/// Must run on the same connection (and transaction) as the insert.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn last_insert_id(conn: &Connection) -> Result<i64, DatabaseError> {
    query_scalar(conn, "SELECT last_insert_rowid()", Parameters::new()).await
}

/// Read a nullable TEXT column exactly as stored.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read a nullable INTEGER column that must fit in `i32`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored value is out of range.
pub fn get_opt_i32(row: &Row, idx: i32) -> Result<Option<i32>, DatabaseError> {
    row.get::<Option<i64>>(idx)?
        .map(|value| {
            i32::try_from(value).map_err(|_| {
                DatabaseError::Query(format!("column {idx}: {value} does not fit in i32"))
            })
        })
        .transpose()
}

/// Read a nullable fixed-point column, normalized to two decimal places.
///
/// Accepts TEXT (the stored form) as well as INTEGER and REAL written by
/// other tools.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value is not a decimal number.
pub fn get_decimal(row: &Row, idx: i32) -> Result<Option<Decimal>, DatabaseError> {
    decimal_from_value(&row.get_value(idx)?)
        .map_err(|reason| DatabaseError::Query(format!("column {idx}: {reason}")))
}

fn decimal_from_value(value: &Value) -> Result<Option<Decimal>, String> {
    let decimal = match value {
        Value::Null => return Ok(None),
        Value::Integer(i) => Decimal::from(*i),
        Value::Real(f) => Decimal::from_str(&format!("{f:.2}"))
            .map_err(|e| format!("{f} is not a decimal number: {e}"))?,
        Value::Text(s) => Decimal::from_str(s.trim())
            .map_err(|e| format!("'{s}' is not a decimal number: {e}"))?,
        Value::Blob(_) => return Err("expected a decimal number, found a blob".to_string()),
    };
    normalize_hours(decimal)
        .map(Some)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn bind_places_values_at_one_based_positions() {
        let params = Parameters::new()
            .bind(2, &7_i32)
            .bind(1, "Deck")
            .bind(3, &None::<String>);

        assert_eq!(
            params.values(),
            &[
                Value::Text("Deck".into()),
                Value::Integer(7),
                Value::Null
            ]
        );
    }

    #[test]
    fn bind_fills_gaps_with_null() {
        let params = Parameters::new().bind(3, &1_i64);
        assert_eq!(params.len(), 3);
        assert_eq!(params.values()[0], Value::Null);
        assert_eq!(params.values()[1], Value::Null);
    }

    #[test]
    fn rebinding_a_position_replaces_it() {
        let params = Parameters::new().bind(1, "old").bind(1, "new");
        assert_eq!(params.values(), &[Value::Text("new".into())]);
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn position_zero_panics() {
        let _ = Parameters::new().bind(0, "x");
    }

    #[rstest]
    #[case(Decimal::new(10, 0), "10.00")]
    #[case(Decimal::new(105, 1), "10.50")]
    #[case(Decimal::new(3145, 3), "3.15")]
    #[case(Decimal::ZERO, "0.00")]
    fn decimals_bind_as_two_place_text(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(value.to_value(), Value::Text(expected.into()));
    }

    #[test]
    fn absent_optionals_bind_null() {
        assert_eq!(None::<Decimal>.to_value(), Value::Null);
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(Some(4_i32).to_value(), Value::Integer(4));
    }

    #[rstest]
    #[case(Value::Text("12.5".into()), Some(Decimal::new(1250, 2)))]
    #[case(Value::Text(" 8 ".into()), Some(Decimal::new(800, 2)))]
    #[case(Value::Integer(3), Some(Decimal::new(300, 2)))]
    #[case(Value::Real(2.25), Some(Decimal::new(225, 2)))]
    #[case(Value::Null, None)]
    fn decimal_readers_accept_numeric_storage(
        #[case] stored: Value,
        #[case] expected: Option<Decimal>,
    ) {
        assert_eq!(decimal_from_value(&stored).unwrap(), expected);
    }

    #[test]
    fn decimal_reader_normalizes_scale() {
        let read = decimal_from_value(&Value::Integer(3)).unwrap().unwrap();
        assert_eq!(read.to_string(), "3.00");
    }

    #[rstest]
    #[case(Value::Text("lots".into()))]
    #[case(Value::Blob(vec![1, 2]))]
    #[case(Value::Text("7922816251426433759354395033".into()))]
    fn decimal_reader_rejects_unusable_values(#[case] stored: Value) {
        assert!(decimal_from_value(&stored).is_err());
    }
}
