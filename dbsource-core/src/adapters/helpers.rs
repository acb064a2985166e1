//! Shared resolution logic for the MySQL-wire engine family.
//!
//! TiDB speaks the MySQL wire protocol, so URL construction and the
//! cursor-eligible type set are shared between the engine adapters here.

use crate::config::{ConnectionDescriptor, SourceConfig};
use crate::models::ColumnType;

/// Fixed, ordered TLS parameter list appended when a config requests an
/// encrypted channel.
///
/// # Security
/// `ssl-mode=REQUIRED` demands encryption but does NOT verify the server
/// certificate chain, leaving the connection open to an active
/// man-in-the-middle presenting its own certificate. This reproduces the
/// upstream driver default for these engines; deployments that need chain
/// verification can leave `ssl` unset and pass a stricter mode through
/// `url_params` instead.
pub const TLS_URL_PARAMETERS: &[&str] = &["ssl-mode=REQUIRED"];

/// Column types usable as an incremental cursor on MySQL-wire engines.
///
/// Membership means the type's values order monotonically enough to
/// resume extraction from the last seen value. `JSON` and `GEOMETRY` are
/// recognized types but have no usable total order, and unrecognized
/// types ([`ColumnType::Other`]) are never members.
pub const CURSOR_ELIGIBLE_TYPES: &[ColumnType] = &[
    ColumnType::Bit,
    ColumnType::Boolean,
    ColumnType::TinyInt,
    ColumnType::TinyIntUnsigned,
    ColumnType::SmallInt,
    ColumnType::SmallIntUnsigned,
    ColumnType::MediumInt,
    ColumnType::MediumIntUnsigned,
    ColumnType::Int,
    ColumnType::IntUnsigned,
    ColumnType::BigInt,
    ColumnType::BigIntUnsigned,
    ColumnType::Float,
    ColumnType::FloatUnsigned,
    ColumnType::Double,
    ColumnType::DoubleUnsigned,
    ColumnType::Decimal,
    ColumnType::DecimalUnsigned,
    ColumnType::Date,
    ColumnType::DateTime,
    ColumnType::Timestamp,
    ColumnType::Time,
    ColumnType::Year,
    ColumnType::Char,
    ColumnType::VarChar,
    ColumnType::TinyText,
    ColumnType::Text,
    ColumnType::MediumText,
    ColumnType::LongText,
    ColumnType::Enum,
    ColumnType::Set,
    ColumnType::TinyBlob,
    ColumnType::Blob,
    ColumnType::MediumBlob,
    ColumnType::LongBlob,
    ColumnType::Binary,
    ColumnType::VarBinary,
];

/// Resolves a config into a MySQL-wire connection descriptor.
///
/// URL assembly order is fixed: base URL, then any `url_params` verbatim,
/// then the TLS parameters when `ssl` is true, each segment terminated by
/// `&`. Pure and idempotent: equal configs yield byte-identical
/// descriptors.
pub fn resolve_mysql_wire(config: &SourceConfig) -> ConnectionDescriptor {
    let mut connection_url = format!(
        "mysql://{}:{}/{}?",
        config.host, config.port, config.database
    );

    if let Some(params) = config.url_params.as_deref() {
        if !params.is_empty() {
            connection_url.push_str(params);
            connection_url.push('&');
        }
    }

    if config.ssl == Some(true) {
        for parameter in TLS_URL_PARAMETERS {
            connection_url.push_str(parameter);
            connection_url.push('&');
        }
    }

    tracing::debug!(
        url = %crate::error::redact_connection_url(&connection_url),
        username = %config.username,
        "resolved connection descriptor"
    );

    ConnectionDescriptor {
        username: config.username.clone(),
        connection_url,
        password: config.password.clone(),
    }
}
