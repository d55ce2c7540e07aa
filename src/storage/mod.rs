//! Storage layer
//!
//! A thin wrapper over the Postgres pool. The gateway only ever runs
//! single validated SELECT statements, so the whole surface is one trait.

pub mod database;

pub use database::{Database, QueryExecutor};
