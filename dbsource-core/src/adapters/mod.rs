//! Source adapter trait and factory.
//!
//! Each supported engine implements [`SourceAdapter`], the capability
//! interface the external extraction framework programs against: resolve
//! connection parameters, classify cursor-eligible columns, and report
//! engine-internal namespaces. Adapters are selected by explicit
//! configuration through [`create_adapter`] rather than by inheritance
//! from a generic base.
//!
//! # Module Structure
//! - `helpers`: shared MySQL-wire URL construction and cursor allow-list
//! - Engine-specific modules (`tidb`, `mysql`), cargo-feature gated
//!
//! # Concurrency
//! Every trait operation is pure and synchronous: no I/O, no shared
//! mutable state, no locking. Adapters may be called concurrently across
//! independent jobs without coordination.

use crate::config::{ConnectionDescriptor, SourceConfig};
use crate::error::{DbSourceError, Result};
use crate::models::{Column, ColumnType};
use std::fmt;
use std::str::FromStr;

pub mod helpers;

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "tidb")]
pub mod tidb;

/// Supported source engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// TiDB (MySQL wire compatible)
    Tidb,
    /// MySQL / MariaDB
    Mysql,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tidb => write!(f, "tidb"),
            Self::Mysql => write!(f, "mysql"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = DbSourceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tidb" => Ok(Self::Tidb),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            other => Err(DbSourceError::unsupported_source(
                other,
                "known source kinds are: tidb, mysql",
            )),
        }
    }
}

/// Capability interface for engine-specific source adapters.
///
/// # Object Safety
/// The trait is object-safe, allowing dynamic dispatch through
/// `Box<dyn SourceAdapter>` from the [`create_adapter`] factory.
///
/// # Purity
/// All methods are pure functions over their inputs plus the adapter's
/// immutable constants. None block, suspend, or perform I/O.
pub trait SourceAdapter: Send + Sync {
    /// The engine this adapter handles.
    fn source_kind(&self) -> SourceKind;

    /// Resolves a job's [`SourceConfig`] into the parameters an external
    /// driver-connection factory needs.
    ///
    /// Performs no validation beyond the shape already enforced at
    /// deserialization; malformed host or database values surface
    /// downstream as connection failures.
    fn build_connection(&self, config: &SourceConfig) -> ConnectionDescriptor;

    /// Column types whose values are monotonically comparable enough to
    /// resume incremental extraction from the last seen value.
    ///
    /// Static for the lifetime of the process.
    fn allowed_cursor_types(&self) -> &'static [ColumnType];

    /// Schema namespaces maintained by the engine itself, never surfaced
    /// as user data.
    fn excluded_namespaces(&self) -> &'static [&'static str];

    /// Filters discovered columns down to those eligible to drive an
    /// incremental cursor, preserving input order.
    ///
    /// A column with an unrecognized type is excluded rather than
    /// failing the classification: dropping one non-eligible column is
    /// safer than aborting discovery for the whole table.
    fn cursor_fields(&self, columns: &[Column]) -> Vec<String> {
        let allowed = self.allowed_cursor_types();
        columns
            .iter()
            .filter(|column| {
                let eligible = allowed.contains(&column.column_type);
                if !eligible {
                    tracing::debug!(
                        column = %column.name,
                        column_type = %column.column_type,
                        "column excluded from cursor candidates"
                    );
                }
                eligible
            })
            .map(|column| column.name.clone())
            .collect()
    }

    /// Whether `name` is an engine-internal namespace.
    fn is_internal_namespace(&self, name: &str) -> bool {
        self.excluded_namespaces().contains(&name)
    }
}

/// Creates the adapter for an explicitly configured source kind.
///
/// # Errors
/// Returns [`DbSourceError::UnsupportedSource`] if support for the
/// requested engine was not compiled in.
///
/// # Example
/// ```rust
/// use dbsource_core::adapters::{SourceKind, create_adapter};
///
/// let adapter = create_adapter(SourceKind::Tidb).expect("tidb is a default feature");
/// assert_eq!(adapter.source_kind(), SourceKind::Tidb);
/// ```
pub fn create_adapter(kind: SourceKind) -> Result<Box<dyn SourceAdapter>> {
    match kind {
        #[cfg(feature = "tidb")]
        SourceKind::Tidb => Ok(Box::new(tidb::TidbAdapter)),
        #[cfg(not(feature = "tidb"))]
        SourceKind::Tidb => Err(DbSourceError::unsupported_source(
            "tidb",
            "compile with --features tidb to enable TiDB support",
        )),
        #[cfg(feature = "mysql")]
        SourceKind::Mysql => Ok(Box::new(mysql::MySqlAdapter)),
        #[cfg(not(feature = "mysql"))]
        SourceKind::Mysql => Err(DbSourceError::unsupported_source(
            "mysql",
            "compile with --features mysql to enable MySQL support",
        )),
    }
}
