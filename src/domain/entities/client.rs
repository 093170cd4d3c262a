use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::partial_update::{FieldMapping, TableSpec};
use crate::domain::value_objects::ClientId;

/// Columns of `clients` that a partial update may touch, in `SET` order
pub const CLIENT_FIELDS: &[FieldMapping] = &[
    FieldMapping::text("updatedFirstName", "first_name"),
    FieldMapping::text("updatedLastName", "last_name"),
    FieldMapping::text("updatedEmail", "client_email"),
    FieldMapping::text("updatedPhone", "client_phone"),
    FieldMapping::text("updatedSsn", "client_ssn"),
    FieldMapping::text("updatedAddress", "client_address"),
    FieldMapping::integer("updatedZip", "client_zipcode"),
    FieldMapping::text("updatedCity", "client_city"),
    FieldMapping::text("updatedRef", "client_reference"),
    FieldMapping::text("updatedNote", "client_note"),
];

pub const CLIENT_TABLE: TableSpec = TableSpec {
    table: "clients",
    key_column: "client_id",
    fields: CLIENT_FIELDS,
};

/// A stored client row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    ssn: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    zipcode: Option<i32>,
    city: Option<String>,
    start_date: Option<NaiveDate>,
    reference: Option<String>,
    note: Option<String>,
}

/// Field values for a client that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub ssn: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub zipcode: Option<i32>,
    pub city: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub reference: Option<String>,
    pub note: Option<String>,
}

impl Client {
    /// Attach the key assigned by the database to the inserted values
    pub fn from_new(id: ClientId, new: NewClient) -> Self {
        Self {
            id,
            ssn: new.ssn,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            zipcode: new.zipcode,
            city: new.city,
            start_date: new.start_date,
            reference: new.reference,
            note: new.note,
        }
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn ssn(&self) -> Option<&str> {
        self.ssn.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn zipcode(&self) -> Option<i32> {
        self.zipcode
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
