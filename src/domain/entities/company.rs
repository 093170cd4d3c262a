use crate::domain::partial_update::{FieldMapping, TableSpec};

/// Body key holding the nested company fields of a client update
pub const UPDATED_COMPANY_KEY: &str = "updatedCompany";

/// Columns of `companies` that a partial update may touch, in `SET` order
pub const COMPANY_FIELDS: &[FieldMapping] = &[
    FieldMapping::integer("updatedCompanyCvr", "company_cvr"),
    FieldMapping::text("updatedCompanyName", "company_name"),
    FieldMapping::text("updatedCompanyMail", "company_email"),
    FieldMapping::text("updatedCompanyPhone", "company_phone"),
    FieldMapping::text("updatedCompanyAddress", "company_address"),
    FieldMapping::integer("updatedCompanyZip", "company_zipcode"),
    FieldMapping::text("updatedCompanyCity", "company_city"),
    FieldMapping::text("updatedCompanyAccountant", "company_accountant"),
    FieldMapping::text("updatedCompanyNote", "company_note"),
];

/// Companies hang off a client and are addressed by the owning `client_id`
pub const COMPANY_TABLE: TableSpec = TableSpec {
    table: "companies",
    key_column: "client_id",
    fields: COMPANY_FIELDS,
};
