//! Connection resolution and cursor classification for relational
//! source connectors.
//!
//! This crate is the configuration slice of a source connector for an
//! external extraction/sync framework. For each supported engine it
//! answers three questions, once per sync job:
//!
//! - which driver connection parameters follow from a job's
//!   [`SourceConfig`] ([`SourceAdapter::build_connection`]),
//! - which discovered columns may drive incremental extraction
//!   ([`SourceAdapter::cursor_fields`]),
//! - which schema namespaces belong to the engine rather than the user
//!   ([`SourceAdapter::excluded_namespaces`]).
//!
//! Everything else — query execution, streaming, checkpointing, schema
//! discovery itself — belongs to the surrounding framework. Every
//! operation here is a pure, synchronous function safe to call
//! concurrently across jobs.
//!
//! # Security Guarantees
//! - Passwords never appear in `Debug`, `Display`, logs, or errors
//! - Resolved connection URLs carry no credentials
//! - No network or file I/O anywhere in this crate

pub mod adapters;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use adapters::{SourceAdapter, SourceKind, create_adapter};
pub use config::{ConnectionDescriptor, SourceConfig};
pub use error::{DbSourceError, Result};
pub use logging::init_logging;
pub use models::{Column, ColumnType};
