//! Partial update statement builder
//!
//! Turns a request body (a mapping of external field names to new values)
//! into an ordered list of column assignments for a single row. Only fields
//! that are present in the body are assigned; a field that is absent stays
//! untouched. Presence is what counts: an explicit `null`, `""` or `0` is
//! still an assignment.
//!
//! The builder is table-agnostic. Each entity declares its updatable columns
//! once as a `&[FieldMapping]`, and the declaration order of that table is
//! the order of the generated `SET` list.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{ClientId, ColumnKind, SqlValue};

/// Maps an external request key onto a database column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub external_key: &'static str,
    pub column: &'static str,
    pub kind: ColumnKind,
}

impl FieldMapping {
    pub const fn new(external_key: &'static str, column: &'static str, kind: ColumnKind) -> Self {
        Self {
            external_key,
            column,
            kind,
        }
    }

    pub const fn text(external_key: &'static str, column: &'static str) -> Self {
        Self::new(external_key, column, ColumnKind::Text)
    }

    pub const fn integer(external_key: &'static str, column: &'static str) -> Self {
        Self::new(external_key, column, ColumnKind::Integer)
    }
}

/// An updatable table: its name, the column used in the `WHERE` clause, and
/// the columns a partial update may touch.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub table: &'static str,
    pub key_column: &'static str,
    pub fields: &'static [FieldMapping],
}

impl TableSpec {
    pub fn build_update<Id, V, S>(
        &self,
        entity_id: Id,
        field_map: &S,
    ) -> Result<UpdatePlan<Id, V>, DomainError>
    where
        Id: EntityKey,
        V: Clone,
        S: FieldSource<V> + ?Sized,
    {
        build_update(entity_id, field_map, self.fields)
    }
}

/// Anything that can answer "was this key supplied, and with what value?"
pub trait FieldSource<V> {
    fn field(&self, key: &str) -> Option<&V>;
}

impl<V, H: BuildHasher> FieldSource<V> for HashMap<String, V, H> {
    fn field(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V> FieldSource<V> for BTreeMap<String, V> {
    fn field(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl FieldSource<Value> for serde_json::Map<String, Value> {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Identifier used in the `WHERE` clause of an update
pub trait EntityKey {
    fn check_key(&self) -> Result<(), DomainError>;
}

impl EntityKey for ClientId {
    fn check_key(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

impl EntityKey for i64 {
    fn check_key(&self) -> Result<(), DomainError> {
        if *self <= 0 {
            return Err(DomainError::InvalidArgument(format!(
                "entity ID must be positive, got {}",
                self
            )));
        }
        Ok(())
    }
}

impl EntityKey for String {
    fn check_key(&self) -> Result<(), DomainError> {
        self.as_str().check_key()
    }
}

impl EntityKey for &str {
    fn check_key(&self) -> Result<(), DomainError> {
        if self.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "entity ID must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One `column = value` pair of a `SET` list
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<V> {
    pub column: &'static str,
    pub kind: ColumnKind,
    pub value: V,
}

/// A non-empty list of assignments for the row identified by `entity_id`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement<Id, V> {
    assignments: Vec<Assignment<V>>,
    entity_id: Id,
}

impl<Id, V> UpdateStatement<Id, V> {
    pub fn assignments(&self) -> &[Assignment<V>] {
        &self.assignments
    }

    pub fn entity_id(&self) -> &Id {
        &self.entity_id
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assignments.iter().map(|a| a.column)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Never true for a statement produced by `build_update`
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Convert every value, keeping columns and order
    pub fn try_map_values<W, E, F>(self, mut f: F) -> Result<UpdateStatement<Id, W>, E>
    where
        F: FnMut(&'static str, ColumnKind, V) -> Result<W, E>,
    {
        let assignments = self
            .assignments
            .into_iter()
            .map(|a| {
                Ok(Assignment {
                    column: a.column,
                    kind: a.kind,
                    value: f(a.column, a.kind, a.value)?,
                })
            })
            .collect::<Result<Vec<_>, E>>()?;

        Ok(UpdateStatement {
            assignments,
            entity_id: self.entity_id,
        })
    }
}

impl<Id> UpdateStatement<Id, Value> {
    /// Coerce JSON values into typed parameters
    pub fn into_sql_values(self) -> Result<UpdateStatement<Id, SqlValue>, DomainError> {
        self.try_map_values(|column, kind, value| SqlValue::coerce(column, kind, &value))
    }
}

/// Result of `build_update`: either something to execute or nothing at all
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePlan<Id, V> {
    Statement(UpdateStatement<Id, V>),
    NoOp,
}

impl<Id, V> UpdatePlan<Id, V> {
    pub fn is_noop(&self) -> bool {
        matches!(self, UpdatePlan::NoOp)
    }

    pub fn statement(&self) -> Option<&UpdateStatement<Id, V>> {
        match self {
            UpdatePlan::Statement(statement) => Some(statement),
            UpdatePlan::NoOp => None,
        }
    }

    pub fn into_statement(self) -> Option<UpdateStatement<Id, V>> {
        match self {
            UpdatePlan::Statement(statement) => Some(statement),
            UpdatePlan::NoOp => None,
        }
    }
}

impl<Id> UpdatePlan<Id, Value> {
    pub fn into_sql_values(self) -> Result<UpdatePlan<Id, SqlValue>, DomainError> {
        match self {
            UpdatePlan::Statement(statement) => {
                Ok(UpdatePlan::Statement(statement.into_sql_values()?))
            }
            UpdatePlan::NoOp => Ok(UpdatePlan::NoOp),
        }
    }
}

/// Build an update touching only the fields present in `field_map`.
///
/// Walks `candidate_fields` in declaration order and emits an assignment for
/// every entry whose external key is present. Keys in `field_map` that no
/// candidate names are ignored. Returns `UpdatePlan::NoOp` when nothing was
/// supplied; callers must skip execution in that case.
pub fn build_update<Id, V, S>(
    entity_id: Id,
    field_map: &S,
    candidate_fields: &[FieldMapping],
) -> Result<UpdatePlan<Id, V>, DomainError>
where
    Id: EntityKey,
    V: Clone,
    S: FieldSource<V> + ?Sized,
{
    entity_id.check_key()?;

    let assignments: Vec<Assignment<V>> = candidate_fields
        .iter()
        .filter_map(|mapping| {
            field_map.field(mapping.external_key).map(|value| Assignment {
                column: mapping.column,
                kind: mapping.kind,
                value: value.clone(),
            })
        })
        .collect();

    if assignments.is_empty() {
        return Ok(UpdatePlan::NoOp);
    }

    Ok(UpdatePlan::Statement(UpdateStatement {
        assignments,
        entity_id,
    }))
}
