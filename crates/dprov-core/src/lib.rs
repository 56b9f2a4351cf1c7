//! Declarative model for provisioning a Directus content schema.
//!
//! Everything in this crate is data: descriptors that serialize directly
//! into the Directus schema API wire format, the fixed `articles`
//! blueprint, and the outcome types a reconciliation run reports. All
//! I/O lives in `dprov-cli`.

pub mod outcome;
pub mod schema;

pub use outcome::{EnsureOutcome, FieldOutcome, RunReport};
pub use schema::{CollectionSpec, FieldSpec, FieldType, PermissionGrant};
