use crate::domain::partial_update::{TableSpec, UpdateStatement};

/// Common SQL text for the client and company tables
pub struct QueryBuilder;

impl QueryBuilder {
    /// Base SELECT clause for client queries
    pub const CLIENT_SELECT: &'static str = r#"
        SELECT client_id, client_ssn, first_name, last_name, client_email,
               client_phone, client_address, client_zipcode, client_city,
               client_start_date, client_reference, client_note
        FROM clients
    "#;

    pub const CLIENT_INSERT: &'static str = r#"
        INSERT INTO clients (
            client_ssn, first_name, last_name, client_email, client_phone,
            client_address, client_zipcode, client_city, client_start_date,
            client_reference, client_note
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING client_id
    "#;

    pub const DELETE_COMPANIES: &'static str = "DELETE FROM companies WHERE client_id = $1";

    pub const DELETE_CLIENT: &'static str = "DELETE FROM clients WHERE client_id = $1";

    /// Render `UPDATE <table> SET c1 = $1, ... WHERE <key> = $n`.
    ///
    /// Placeholders follow the assignment order; the key is bound last.
    pub fn update_sql<Id, V>(table: &TableSpec, statement: &UpdateStatement<Id, V>) -> String {
        let set_list = statement
            .columns()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            table.table,
            set_list,
            table.key_column,
            statement.len() + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CLIENT_TABLE, COMPANY_TABLE};
    use crate::domain::value_objects::ClientId;
    use serde_json::{json, Map, Value};

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_single_field_update() {
        let id = ClientId::new(42).unwrap();
        let fields = body(json!({"updatedEmail": "a@b.dk"}));

        let statement = CLIENT_TABLE
            .build_update::<_, Value, _>(id, &fields)
            .unwrap()
            .into_statement()
            .unwrap();

        assert_eq!(
            QueryBuilder::update_sql(&CLIENT_TABLE, &statement),
            "UPDATE clients SET client_email = $1 WHERE client_id = $2"
        );
    }

    #[test]
    fn test_set_list_follows_declaration_order() {
        let id = ClientId::new(7).unwrap();
        let fields = body(json!({
            "updatedCity": "Aarhus",
            "updatedFirstName": "Ada",
            "updatedZip": 8000
        }));

        let statement = CLIENT_TABLE
            .build_update::<_, Value, _>(id, &fields)
            .unwrap()
            .into_statement()
            .unwrap();

        assert_eq!(
            QueryBuilder::update_sql(&CLIENT_TABLE, &statement),
            concat!(
                "UPDATE clients SET first_name = $1, client_zipcode = $2, client_city = $3 ",
                "WHERE client_id = $4"
            )
        );
    }

    #[test]
    fn test_company_update_keys_on_client_id() {
        let id = ClientId::new(3).unwrap();
        let fields = body(json!({"updatedCompanyName": "Acme ApS", "updatedCompanyCvr": 12345678}));

        let statement = COMPANY_TABLE
            .build_update::<_, Value, _>(id, &fields)
            .unwrap()
            .into_statement()
            .unwrap();

        assert_eq!(
            QueryBuilder::update_sql(&COMPANY_TABLE, &statement),
            "UPDATE companies SET company_cvr = $1, company_name = $2 WHERE client_id = $3"
        );
    }

    #[test]
    fn test_insert_has_one_placeholder_per_column() {
        assert!(QueryBuilder::CLIENT_INSERT.contains("$11"));
        assert!(!QueryBuilder::CLIENT_INSERT.contains("$12"));
        assert!(QueryBuilder::CLIENT_INSERT.contains("RETURNING client_id"));
    }
}
