//! MySQL source adapter.
//!
//! Shares connection resolution and the cursor-eligible type set with the
//! other MySQL-wire engines; differs from TiDB only in its internal
//! namespace set (`sys` exists, `metrics_schema` does not).

use super::{SourceAdapter, SourceKind, helpers};
use crate::config::{ConnectionDescriptor, SourceConfig};
use crate::models::ColumnType;

const EXCLUDED_NAMESPACES: &[&str] = &[
    "information_schema",
    "mysql",
    "performance_schema",
    "sys",
];

/// Source adapter for MySQL and MariaDB.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlAdapter;

impl SourceAdapter for MySqlAdapter {
    fn source_kind(&self) -> SourceKind {
        SourceKind::Mysql
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
