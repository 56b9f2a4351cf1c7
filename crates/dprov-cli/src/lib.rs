//! Provisioning CLI for a Directus-compatible backend.
//!
//! One invocation converges the remote `articles` schema (collection,
//! fields, public read permission) to the blueprint in `dprov-core`,
//! idempotently: any prior remote state — missing, partial or complete
//! — ends up in the same place, and re-runs never duplicate resources.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod reconcile;
