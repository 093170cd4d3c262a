mod client;
mod company;

pub use client::{Client, NewClient, CLIENT_FIELDS, CLIENT_TABLE};
pub use company::{COMPANY_FIELDS, COMPANY_TABLE, UPDATED_COMPANY_KEY};
