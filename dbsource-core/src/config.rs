//! Source configuration and resolved connection descriptors.
//!
//! [`SourceConfig`] is the inbound contract: one JSON document per sync
//! job, deserialized once and never mutated. [`ConnectionDescriptor`] is
//! the outbound result handed to an external driver-connection factory
//! and discarded after the connection is opened.
//!
//! # Security
//! Neither type exposes the password through `Debug` or `Display`;
//! callers that must print a descriptor go through
//! [`ConnectionDescriptor::redacted`] unless secrets were explicitly
//! requested.

use crate::error::{DbSourceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection configuration for a single sync job.
///
/// Required fields are enforced at deserialization time; a document
/// missing `host`, `port`, `database`, or `username` fails fast before
/// any adapter sees it. Optional fields default to absent, and an absent
/// password is a distinct state from an empty one.
///
/// # Example
/// ```rust
/// use dbsource_core::config::SourceConfig;
///
/// let config = SourceConfig::from_json(
///     r#"{"host": "db.local", "port": 4000, "database": "shop", "username": "u"}"#,
/// ).expect("valid config");
/// assert_eq!(config.host, "db.local");
/// assert!(config.password.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Database host address
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database name to extract from
    pub database: String,
    /// Username presented to the engine
    pub username: String,
    /// Optional password; absent and empty are distinct states
    #[serde(default)]
    pub password: Option<String>,
    /// Whether to require an encrypted channel
    #[serde(default)]
    pub ssl: Option<bool>,
    /// Extra driver URL parameters, appended verbatim.
    /// The `jdbc_url_params` spelling used by JDBC-based stacks is
    /// accepted as an alias.
    #[serde(default, alias = "jdbc_url_params")]
    pub url_params: Option<String>,
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .field("ssl", &self.ssl)
            .field("url_params", &self.url_params)
            .finish()
    }
}

impl fmt::Display for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credentials intentionally omitted
        write!(
            f,
            "SourceConfig({}:{}/{})",
            self.host, self.port, self.database
        )
    }
}

impl SourceConfig {
    /// Creates a config with the required fields; optional fields start
    /// absent.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            username: username.into(),
            password: None,
            ssl: None,
            url_params: None,
        }
    }

    /// Builder method to set the password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Builder method to request an encrypted channel.
    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = Some(ssl);
        self
    }

    /// Builder method to set extra driver URL parameters.
    pub fn with_url_params(mut self, params: impl Into<String>) -> Self {
        self.url_params = Some(params.into());
        self
    }

    /// Deserializes a config document, failing fast on shape errors.
    ///
    /// # Errors
    /// Returns [`DbSourceError::Serialization`] if the document is not
    /// valid JSON or a required field is missing or mistyped.
    pub fn from_json(document: &str) -> Result<Self> {
        serde_json::from_str(document)
            .map_err(|e| DbSourceError::serialization("Failed to parse source config", e))
    }
}

/// The resolved set of parameters needed to open a driver-level
/// connection to the target engine.
///
/// Produced once per job by [`SourceAdapter::build_connection`] and
/// consumed by an external driver-connection factory; this crate never
/// opens the connection itself.
///
/// [`SourceAdapter::build_connection`]: crate::adapters::SourceAdapter::build_connection
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionDescriptor {
    /// Username presented to the engine
    pub username: String,
    /// Driver connection URL (never carries credentials)
    pub connection_url: String,
    /// Password, present only when the input config carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("username", &self.username)
            .field("connection_url", &self.connection_url)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .finish()
    }
}

impl ConnectionDescriptor {
    /// Returns a copy safe for logs and default CLI output: the password,
    /// if present, is replaced with a mask so its presence remains
    /// observable without its value.
    pub fn redacted(&self) -> Self {
        Self {
            username: self.username.clone(),
            connection_url: self.connection_url.clone(),
            password: self.password.as_ref().map(|_| "****".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full_document() {
        let config = SourceConfig::from_json(
            r#"{
                "host": "db.local",
                "port": 4000,
                "database": "shop",
                "username": "u",
                "password": "s3cret",
                "ssl": true,
                "url_params": "connect_timeout=10"
            }"#,
        )
        .expect("config should parse");

        assert_eq!(config.host, "db.local");
        assert_eq!(config.port, 4000);
        assert_eq!(config.database, "shop");
        assert_eq!(config.username, "u");
        assert_eq!(config.password.as_deref(), Some("s3cret"));
        assert_eq!(config.ssl, Some(true));
        assert_eq!(config.url_params.as_deref(), Some("connect_timeout=10"));
    }

    #[test]
    fn test_from_json_missing_required_field_fails_fast() {
        let result = SourceConfig::from_json(r#"{"host": "db.local", "port": 4000}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_accepts_jdbc_alias() {
        let config = SourceConfig::from_json(
            r#"{
                "host": "db.local",
                "port": 4000,
                "database": "shop",
                "username": "u",
                "jdbc_url_params": "tcpKeepAlive=true"
            }"#,
        )
        .expect("config should parse");
        assert_eq!(config.url_params.as_deref(), Some("tcpKeepAlive=true"));
    }

    #[test]
    fn test_empty_password_is_distinct_from_absent() {
        let with_empty = SourceConfig::new("h", 4000, "d", "u").with_password("");
        assert_eq!(with_empty.password.as_deref(), Some(""));

        let without = SourceConfig::new("h", 4000, "d", "u");
        assert!(without.password.is_none());
        assert_ne!(with_empty, without);
    }

    #[test]
    fn test_debug_and_display_never_show_password() {
        let config = SourceConfig::new("db.local", 4000, "shop", "u").with_password("hunter2");

        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("****"));

        let display = format!("{config}");
        assert!(!display.contains("hunter2"));
        assert!(display.contains("db.local:4000/shop"));
    }

    #[test]
    fn test_descriptor_debug_never_shows_password() {
        let descriptor = ConnectionDescriptor {
            username: "u".to_string(),
            connection_url: "mysql://db.local:4000/shop?".to_string(),
            password: Some("hunter2".to_string()),
        };
        let debug = format!("{descriptor:?}");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_descriptor_redacted_keeps_password_presence() {
        let descriptor = ConnectionDescriptor {
            username: "u".to_string(),
            connection_url: "mysql://db.local:4000/shop?".to_string(),
            password: Some("hunter2".to_string()),
        };
        let redacted = descriptor.redacted();
        assert_eq!(redacted.password.as_deref(), Some("****"));

        let no_password = ConnectionDescriptor {
            username: "u".to_string(),
            connection_url: "mysql://db.local:4000/shop?".to_string(),
            password: None,
        };
        assert!(no_password.redacted().password.is_none());
    }

    #[test]
    fn test_descriptor_serializes_without_absent_password() {
        let descriptor = ConnectionDescriptor {
            username: "u".to_string(),
            connection_url: "mysql://db.local:4000/shop?".to_string(),
            password: None,
        };
        let json = serde_json::to_string(&descriptor).expect("descriptor should serialize");
        assert!(!json.contains("password"));
    }
}
