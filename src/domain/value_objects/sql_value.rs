use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::DomainError;

/// Semantic type of an updatable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Integer,
    Date,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Date => write!(f, "date"),
        }
    }
}

/// A typed parameter ready to be bound to a statement.
///
/// `Null` keeps its column kind so the driver can bind a typed NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Integer(i32),
    Date(NaiveDate),
    Null(ColumnKind),
}

impl SqlValue {
    /// Coerce a JSON value into the parameter type of `column`.
    ///
    /// Text columns accept strings, numbers and booleans (rendered as text).
    /// Integer columns accept integral numbers and numeric strings. Date
    /// columns accept `YYYY-MM-DD` or RFC 3339 strings. `null` is NULL for
    /// every kind; `""` is NULL for integer and date columns.
    pub fn coerce(column: &str, kind: ColumnKind, value: &Value) -> Result<Self, DomainError> {
        if value.is_null() {
            return Ok(SqlValue::Null(kind));
        }

        match kind {
            ColumnKind::Text => match value {
                Value::String(s) => Ok(SqlValue::Text(s.clone())),
                Value::Number(n) => Ok(SqlValue::Text(n.to_string())),
                Value::Bool(b) => Ok(SqlValue::Text(b.to_string())),
                _ => Err(DomainError::invalid_field(column, "expected a string")),
            },
            ColumnKind::Integer => match value {
                Value::Number(n) => n
                    .as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .map(SqlValue::Integer)
                    .ok_or_else(|| DomainError::invalid_field(column, "expected an integer")),
                Value::String(s) if s.trim().is_empty() => Ok(SqlValue::Null(kind)),
                Value::String(s) => s
                    .trim()
                    .parse::<i32>()
                    .map(SqlValue::Integer)
                    .map_err(|_| DomainError::invalid_field(column, "expected an integer")),
                _ => Err(DomainError::invalid_field(column, "expected an integer")),
            },
            ColumnKind::Date => match value {
                Value::String(s) if s.trim().is_empty() => Ok(SqlValue::Null(kind)),
                Value::String(s) => parse_date(s.trim()).map(SqlValue::Date).ok_or_else(|| {
                    DomainError::invalid_field(column, "expected a YYYY-MM-DD date")
                }),
                _ => Err(DomainError::invalid_field(column, "expected a date string")),
            },
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            SqlValue::Text(_) => ColumnKind::Text,
            SqlValue::Integer(_) => ColumnKind::Integer,
            SqlValue::Date(_) => ColumnKind::Date,
            SqlValue::Null(kind) => *kind,
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
