//! # Client Registry
//!
//! HTTP service for client records and the companies attached to them,
//! built on Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core business logic (entities, value objects, the partial
//!   update builder, domain errors)
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: Postgres persistence
//! - **API**: HTTP handlers and middleware
//!
//! ## Partial updates
//!
//! A `PUT` body names only the fields that change. Each table declares its
//! updatable columns once, and [`domain::partial_update::build_update`]
//! turns the body into an ordered `SET` list, or into
//! [`UpdatePlan::NoOp`](domain::partial_update::UpdatePlan::NoOp) when
//! nothing applies.
//!
//! ```
//! use client_registry::domain::entities::CLIENT_TABLE;
//! use client_registry::domain::value_objects::ClientId;
//! use serde_json::{json, Value};
//!
//! let body = json!({"updatedEmail": "a@b.dk", "unrelated": 1});
//! let plan = CLIENT_TABLE
//!     .build_update::<_, Value, _>(ClientId::new(42).unwrap(), body.as_object().unwrap())
//!     .unwrap();
//!
//! let statement = plan.statement().unwrap();
//! assert_eq!(statement.columns().collect::<Vec<_>>(), ["client_email"]);
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
