use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::entities::{Client, NewClient};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{ClientId, ColumnKind, SqlValue};

/// DTO for client responses.
///
/// Column names match the `clients` table; `id` mirrors `client_id` for
/// front ends that key rows by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: ClientId,
    pub client_id: ClientId,
    pub client_ssn: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub client_address: Option<String>,
    pub client_zipcode: Option<i32>,
    pub client_city: Option<String>,
    pub client_start_date: Option<NaiveDate>,
    pub client_reference: Option<String>,
    pub client_note: Option<String>,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: *client.id(),
            client_id: *client.id(),
            client_ssn: client.ssn().map(str::to_string),
            first_name: client.first_name().map(str::to_string),
            last_name: client.last_name().map(str::to_string),
            client_email: client.email().map(str::to_string),
            client_phone: client.phone().map(str::to_string),
            client_address: client.address().map(str::to_string),
            client_zipcode: client.zipcode(),
            client_city: client.city().map(str::to_string),
            client_start_date: client.start_date(),
            client_reference: client.reference().map(str::to_string),
            client_note: client.note().map(str::to_string),
        }
    }
}

/// DTO for creating a client. Every column is optional.
///
/// Values are kept as raw JSON and coerced with the same rules as a
/// partial update, so `"8000"` is a valid zip code and `""` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    #[schema(value_type = Option<String>)]
    pub client_ssn: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub first_name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub last_name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub client_email: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub client_phone: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub client_address: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub client_zipcode: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub client_city: Option<Value>,
    /// Start date as `YYYY-MM-DD` or RFC 3339
    #[schema(value_type = Option<String>)]
    pub client_start_date: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub client_reference: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub client_note: Option<Value>,
}

impl TryFrom<CreateClientRequest> for NewClient {
    type Error = DomainError;

    fn try_from(request: CreateClientRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            ssn: text_column("client_ssn", request.client_ssn)?,
            first_name: text_column("first_name", request.first_name)?,
            last_name: text_column("last_name", request.last_name)?,
            email: text_column("client_email", request.client_email)?,
            phone: text_column("client_phone", request.client_phone)?,
            address: text_column("client_address", request.client_address)?,
            zipcode: integer_column("client_zipcode", request.client_zipcode)?,
            city: text_column("client_city", request.client_city)?,
            start_date: date_column("client_start_date", request.client_start_date)?,
            reference: text_column("client_reference", request.client_reference)?,
            note: text_column("client_note", request.client_note)?,
        })
    }
}

fn coerce_column(
    column: &str,
    kind: ColumnKind,
    value: Option<Value>,
) -> Result<SqlValue, DomainError> {
    match value {
        Some(value) => SqlValue::coerce(column, kind, &value),
        None => Ok(SqlValue::Null(kind)),
    }
}

fn text_column(column: &str, value: Option<Value>) -> Result<Option<String>, DomainError> {
    match coerce_column(column, ColumnKind::Text, value)? {
        SqlValue::Text(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn integer_column(column: &str, value: Option<Value>) -> Result<Option<i32>, DomainError> {
    match coerce_column(column, ColumnKind::Integer, value)? {
        SqlValue::Integer(i) => Ok(Some(i)),
        _ => Ok(None),
    }
}

fn date_column(column: &str, value: Option<Value>) -> Result<Option<NaiveDate>, DomainError> {
    match coerce_column(column, ColumnKind::Date, value)? {
        SqlValue::Date(d) => Ok(Some(d)),
        _ => Ok(None),
    }
}

/// Body of a partial update, as documented in the OpenAPI schema.
///
/// The handler reads the raw JSON object so that a key being present is
/// distinguishable from a key being absent; every key here is optional
/// and an explicit `null` clears the column.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    pub updated_first_name: Option<String>,
    pub updated_last_name: Option<String>,
    pub updated_email: Option<String>,
    pub updated_phone: Option<String>,
    pub updated_ssn: Option<String>,
    pub updated_address: Option<String>,
    pub updated_zip: Option<i32>,
    pub updated_city: Option<String>,
    pub updated_ref: Option<String>,
    pub updated_note: Option<String>,
    pub updated_company: Option<UpdateCompanyRequest>,
}

/// Company part of a partial update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    pub updated_company_cvr: Option<i32>,
    pub updated_company_name: Option<String>,
    pub updated_company_mail: Option<String>,
    pub updated_company_phone: Option<String>,
    pub updated_company_address: Option<String>,
    pub updated_company_zip: Option<i32>,
    pub updated_company_city: Option<String>,
    pub updated_company_accountant: Option<String>,
    pub updated_company_note: Option<String>,
}

/// DTO for create response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateClientResponse {
    pub message: String,
    pub client_id: ClientId,
}

/// DTO for responses that only carry a confirmation message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
