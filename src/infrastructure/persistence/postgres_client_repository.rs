use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgConnection, PgPool, Postgres};
use tracing::debug;

use crate::application::ports::{
    ClientChanges, ClientRepository, DeleteOutcome, RepositoryError, UpdateOutcome,
};
use crate::domain::entities::{Client, NewClient, CLIENT_TABLE, COMPANY_TABLE};
use crate::domain::partial_update::{TableSpec, UpdateStatement};
use crate::domain::value_objects::{ClientId, ColumnKind, SqlValue};
use crate::infrastructure::persistence::QueryBuilder;

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn list(&self) -> Result<Vec<Client>, RepositoryError> {
        let sql = format!("{} ORDER BY client_id", QueryBuilder::CLIENT_SELECT);

        let mut conn = self.pool.acquire().await?;
        let rows: Vec<ClientRow> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, RepositoryError> {
        let sql = format!("{} WHERE client_id = $1", QueryBuilder::CLIENT_SELECT);

        let mut conn = self.pool.acquire().await?;
        let row: Option<ClientRow> = sqlx::query_as(&sql)
            .bind(id.as_i64())
            .fetch_optional(&mut *conn)
            .await?;

        row.map(|r| r.into_domain()).transpose()
    }

    async fn insert(&self, client: &NewClient) -> Result<ClientId, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let id: i64 = sqlx::query_scalar(QueryBuilder::CLIENT_INSERT)
            .bind(&client.ssn)
            .bind(&client.first_name)
            .bind(&client.last_name)
            .bind(&client.email)
            .bind(&client.phone)
            .bind(&client.address)
            .bind(client.zipcode)
            .bind(&client.city)
            .bind(client.start_date)
            .bind(&client.reference)
            .bind(&client.note)
            .fetch_one(&mut *conn)
            .await
            .map_err(map_db_error)?;

        ClientId::new(id).map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }

    async fn update(&self, changes: &ClientChanges) -> Result<UpdateOutcome, RepositoryError> {
        let mut outcome = UpdateOutcome::default();
        if changes.is_noop() {
            return Ok(outcome);
        }

        // Both statements share one connection; it goes back to the pool on
        // every exit path when `conn` is dropped.
        let mut conn = self.pool.acquire().await?;

        if let Some(statement) = changes.client.statement() {
            outcome.clients_updated = execute_update(&mut conn, &CLIENT_TABLE, statement).await?;
        }

        if let Some(statement) = changes.company.statement() {
            outcome.companies_updated =
                execute_update(&mut conn, &COMPANY_TABLE, statement).await?;
        }

        Ok(outcome)
    }

    async fn delete(&self, id: &ClientId) -> Result<DeleteOutcome, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let companies_deleted = sqlx::query(QueryBuilder::DELETE_COMPANIES)
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let clients_deleted = sqlx::query(QueryBuilder::DELETE_CLIENT)
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

        tx.commit().await?;

        Ok(DeleteOutcome {
            clients_deleted,
            companies_deleted,
        })
    }
}

async fn execute_update(
    conn: &mut PgConnection,
    table: &TableSpec,
    statement: &UpdateStatement<ClientId, SqlValue>,
) -> Result<u64, RepositoryError> {
    let sql = QueryBuilder::update_sql(table, statement);
    debug!(table = table.table, columns = statement.len(), "executing partial update");

    let query = statement
        .assignments()
        .iter()
        .fold(sqlx::query(&sql), |query, assignment| {
            bind_value(query, &assignment.value)
        })
        .bind(statement.entity_id().as_i64());

    let result = query.execute(conn).await.map_err(map_db_error)?;
    Ok(result.rows_affected())
}

/// Bind one coerced value. NULLs are bound with the column's type so
/// Postgres can infer the parameter.
fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Text(s) => query.bind(s.clone()),
        SqlValue::Integer(i) => query.bind(*i),
        SqlValue::Date(d) => query.bind(*d),
        SqlValue::Null(ColumnKind::Text) => query.bind(None::<String>),
        SqlValue::Null(ColumnKind::Integer) => query.bind(None::<i32>),
        SqlValue::Null(ColumnKind::Date) => query.bind(None::<NaiveDate>),
    }
}

fn map_db_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db)
            if db.is_unique_violation()
                || db.is_foreign_key_violation()
                || db.is_check_violation() =>
        {
            RepositoryError::ConstraintViolation(db.message().to_string())
        }
        _ => RepositoryError::Database(err),
    }
}

// Internal row mapping struct
#[derive(sqlx::FromRow)]
struct ClientRow {
    client_id: i64,
    client_ssn: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    client_email: Option<String>,
    client_phone: Option<String>,
    client_address: Option<String>,
    client_zipcode: Option<i32>,
    client_city: Option<String>,
    client_start_date: Option<NaiveDate>,
    client_reference: Option<String>,
    client_note: Option<String>,
}

impl ClientRow {
    fn into_domain(self) -> Result<Client, RepositoryError> {
        let id = ClientId::new(self.client_id).map_err(|e| {
            RepositoryError::SerializationError(format!("Invalid client_id: {}", e))
        })?;

        Ok(Client::from_new(
            id,
            NewClient {
                ssn: self.client_ssn,
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.client_email,
                phone: self.client_phone,
                address: self.client_address,
                zipcode: self.client_zipcode,
                city: self.client_city,
                start_date: self.client_start_date,
                reference: self.client_reference,
                note: self.client_note,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(client_id: i64) -> ClientRow {
        ClientRow {
            client_id,
            client_ssn: None,
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            client_email: Some("ada@example.dk".to_string()),
            client_phone: None,
            client_address: None,
            client_zipcode: Some(8000),
            client_city: Some("Aarhus".to_string()),
            client_start_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            client_reference: None,
            client_note: None,
        }
    }

    #[test]
    fn test_row_into_domain() {
        let client = row(9).into_domain().unwrap();

        assert_eq!(client.id().as_i64(), 9);
        assert_eq!(client.email(), Some("ada@example.dk"));
        assert_eq!(client.zipcode(), Some(8000));
        assert_eq!(client.city(), Some("Aarhus"));
    }

    #[test]
    fn test_row_with_invalid_key_is_rejected() {
        let result = row(0).into_domain();
        assert!(matches!(result, Err(RepositoryError::SerializationError(_))));
    }

    #[test]
    fn test_non_database_errors_are_not_constraint_violations() {
        let err = map_db_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
