//! Foglio: a multi-author publishing backend.
//!
//! The crate is layered the conventional way: `domain` holds the records and
//! invariants, `application` the services and repository traits, `infra` the
//! Postgres adapters and the HTTP boundary, `config` the deployment
//! settings. All state lives in PostgreSQL; the services are stateless
//! between calls.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
