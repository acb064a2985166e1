//! TiDB source adapter.
//!
//! TiDB is wire-compatible with MySQL, so connection resolution and the
//! cursor-eligible type set come from the shared MySQL-wire helpers. What
//! is TiDB-specific is the set of engine-internal namespaces: TiDB adds
//! `metrics_schema` to the familiar MySQL system schemas and has no `sys`
//! schema.


use super::{SourceAdapter, SourceKind, helpers};
use crate::config::{ConnectionDescriptor, SourceConfig};
use crate::models::ColumnType;

/// Namespaces maintained by the TiDB engine itself.
const EXCLUDED_NAMESPACES: &[&str] = &[
    "information_schema",
    "metrics_schema",
    "performance_schema",
    "mysql",
];

/// Source adapter for TiDB.
///
/// Stateless; all behavior derives from process-wide immutable constants,
/// so a single value may serve any number of concurrent jobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TidbAdapter;

impl SourceAdapter for TidbAdapter {
    fn source_kind(&self) -> SourceKind {
        SourceKind::Tidb
    }

    fn build_connection(&self, config: &SourceConfig) -> ConnectionDescriptor {
        helpers::resolve_mysql_wire(config)
    }

    fn allowed_cursor_types(&self) -> &'static [ColumnType] {
        helpers::CURSOR_ELIGIBLE_TYPES
    }

    fn excluded_namespaces(&self) -> &'static [&'static str] {
        EXCLUDED_NAMESPACES
    }
}
