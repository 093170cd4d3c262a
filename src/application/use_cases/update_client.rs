use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::application::errors::ClientUseCaseError;
use crate::application::ports::{ClientChanges, ClientRepository, UpdateOutcome};
use crate::domain::entities::{CLIENT_TABLE, COMPANY_TABLE, UPDATED_COMPANY_KEY};
use crate::domain::partial_update::UpdatePlan;
use crate::domain::value_objects::ClientId;

/// Use case: Partially update a client and its company
pub struct UpdateClientUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl UpdateClientUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// Build the client and company plans from `body` and execute them.
    ///
    /// Company fields are read from the nested `updatedCompany` object. When
    /// neither plan has assignments the repository is not called.
    pub async fn execute(
        &self,
        client_id: &str,
        body: &Map<String, Value>,
    ) -> Result<UpdateOutcome, ClientUseCaseError> {
        let changes = Self::plan(client_id, body)?;

        if changes.is_noop() {
            debug!(client_id = %client_id, "client_update_skipped_no_fields");
            return Ok(UpdateOutcome::default());
        }

        let outcome = self.repository.update(&changes).await?;

        info!(
            client_id = %client_id,
            clients_updated = outcome.clients_updated,
            companies_updated = outcome.companies_updated,
            "client_updated"
        );
        Ok(outcome)
    }

    /// Typed update plans for `body`, without touching the database
    ///
    /// `updatedCompany` only yields a company plan when it is an object; any
    /// other value leaves the company untouched.
    pub fn plan(
        client_id: &str,
        body: &Map<String, Value>,
    ) -> Result<ClientChanges, ClientUseCaseError> {
        let id: ClientId = client_id.parse()?;

        let company_fields = match body.get(UPDATED_COMPANY_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::Object(fields)) => Some(fields),
            Some(other) => {
                debug!(
                    client_id = %id,
                    company_type = json_type(other),
                    "company_update_skipped_not_an_object"
                );
                None
            }
        };

        let client = CLIENT_TABLE
            .build_update::<_, Value, _>(id, body)?
            .into_sql_values()?;
        let company = match company_fields {
            Some(fields) => COMPANY_TABLE
                .build_update::<_, Value, _>(id, fields)?
                .into_sql_values()?,
            None => UpdatePlan::NoOp,
        };

        Ok(ClientChanges { client, company })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
