//! Column metadata supplied by external schema discovery.
//!
//! The extraction framework discovers tables and hands each adapter a list
//! of [`Column`] values. Types arrive as the names the engine reports
//! (`INFORMATION_SCHEMA` spellings such as `"tinyint unsigned"`); parsing
//! is total — a name this crate does not recognize is carried as
//! [`ColumnType::Other`] instead of failing discovery for the whole table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic column types of the MySQL wire family.
///
/// This is the closed set of types the adapters classify. Engines report
/// type names in a variety of spellings; [`ColumnType::parse`] normalizes
/// case, whitespace, and underscore separators before matching, and common
/// synonyms (`BOOL`, `INTEGER`, `NUMERIC`, `DOUBLE PRECISION`,
/// `CHARACTER VARYING`) map to their canonical variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Bit,
    Boolean,
    TinyInt,
    TinyIntUnsigned,
    SmallInt,
    SmallIntUnsigned,
    MediumInt,
    MediumIntUnsigned,
    Int,
    IntUnsigned,
    BigInt,
    BigIntUnsigned,
    Float,
    FloatUnsigned,
    Double,
    DoubleUnsigned,
    Decimal,
    DecimalUnsigned,
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,
    Char,
    VarChar,
    TinyText,
    Text,
    MediumText,
    LongText,
    Enum,
    Set,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Binary,
    VarBinary,
    Json,
    Geometry,
    /// A type name this crate does not recognize, preserved verbatim.
    /// Never eligible as an incremental cursor.
    Other(String),
}

impl ColumnType {
    /// Parses an engine-reported type name.
    ///
    /// Parsing is total: unrecognized names become [`ColumnType::Other`]
    /// carrying the trimmed original spelling.
    ///
    /// # Example
    /// ```rust
    /// use dbsource_core::models::ColumnType;
    ///
    /// assert_eq!(ColumnType::parse("tinyint unsigned"), ColumnType::TinyIntUnsigned);
    /// assert_eq!(ColumnType::parse("INTEGER"), ColumnType::Int);
    /// assert_eq!(ColumnType::parse("vector"), ColumnType::Other("vector".to_string()));
    /// ```
    pub fn parse(name: &str) -> Self {
        let normalized = normalize_type_name(name);
        let (base, unsigned) = match normalized.strip_suffix(" UNSIGNED") {
            Some(base) => (base, true),
            None => (normalized.as_str(), false),
        };
        from_base(base, unsigned).unwrap_or_else(|| Self::Other(name.trim().to_string()))
    }

    /// Canonical uppercase name of this type.
    ///
    /// For [`ColumnType::Other`] the preserved original spelling is
    /// returned, so parse/format round-trips are lossless.
    pub fn name(&self) -> &str {
        match self {
            Self::Bit => "BIT",
            Self::Boolean => "BOOLEAN",
            Self::TinyInt => "TINYINT",
            Self::TinyIntUnsigned => "TINYINT UNSIGNED",
            Self::SmallInt => "SMALLINT",
            Self::SmallIntUnsigned => "SMALLINT UNSIGNED",
            Self::MediumInt => "MEDIUMINT",
            Self::MediumIntUnsigned => "MEDIUMINT UNSIGNED",
            Self::Int => "INT",
            Self::IntUnsigned => "INT UNSIGNED",
            Self::BigInt => "BIGINT",
            Self::BigIntUnsigned => "BIGINT UNSIGNED",
            Self::Float => "FLOAT",
            Self::FloatUnsigned => "FLOAT UNSIGNED",
            Self::Double => "DOUBLE",
            Self::DoubleUnsigned => "DOUBLE UNSIGNED",
            Self::Decimal => "DECIMAL",
            Self::DecimalUnsigned => "DECIMAL UNSIGNED",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Time => "TIME",
            Self::Year => "YEAR",
            Self::Char => "CHAR",
            Self::VarChar => "VARCHAR",
            Self::TinyText => "TINYTEXT",
            Self::Text => "TEXT",
            Self::MediumText => "MEDIUMTEXT",
            Self::LongText => "LONGTEXT",
            Self::Enum => "ENUM",
            Self::Set => "SET",
            Self::TinyBlob => "TINYBLOB",
            Self::Blob => "BLOB",
            Self::MediumBlob => "MEDIUMBLOB",
            Self::LongBlob => "LONGBLOB",
            Self::Binary => "BINARY",
            Self::VarBinary => "VARBINARY",
            Self::Json => "JSON",
            Self::Geometry => "GEOMETRY",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&str> for ColumnType {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.name().to_string()
    }
}

/// Uppercases, trims, and collapses separators so that
/// `"tinyint_unsigned"`, `"TINYINT  UNSIGNED"`, and `"tinyint unsigned"`
/// all normalize to `"TINYINT UNSIGNED"`.
fn normalize_type_name(name: &str) -> String {
    name.trim()
        .to_uppercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps a normalized base name plus unsigned flag to a variant.
///
/// Returns `None` for unknown names and for `UNSIGNED` applied to a
/// non-numeric type, which callers treat as unrecognized.
fn from_base(base: &str, unsigned: bool) -> Option<ColumnType> {
    use ColumnType::*;

    if unsigned {
        return match base {
            "TINYINT" => Some(TinyIntUnsigned),
            "SMALLINT" => Some(SmallIntUnsigned),
            "MEDIUMINT" => Some(MediumIntUnsigned),
            "INT" | "INTEGER" => Some(IntUnsigned),
            "BIGINT" => Some(BigIntUnsigned),
            "FLOAT" => Some(FloatUnsigned),
            "DOUBLE" | "DOUBLE PRECISION" => Some(DoubleUnsigned),
            "DECIMAL" | "NUMERIC" => Some(DecimalUnsigned),
            _ => None,
        };
    }

    match base {
        "BIT" => Some(Bit),
        "BOOLEAN" | "BOOL" => Some(Boolean),
        "TINYINT" => Some(TinyInt),
        "SMALLINT" => Some(SmallInt),
        "MEDIUMINT" => Some(MediumInt),
        "INT" | "INTEGER" => Some(Int),
        "BIGINT" => Some(BigInt),
        "FLOAT" => Some(Float),
        "DOUBLE" | "DOUBLE PRECISION" => Some(Double),
        "DECIMAL" | "NUMERIC" => Some(Decimal),
        "DATE" => Some(Date),
        "DATETIME" => Some(DateTime),
        "TIMESTAMP" => Some(Timestamp),
        "TIME" => Some(Time),
        "YEAR" => Some(Year),
        "CHAR" | "CHARACTER" => Some(Char),
        "VARCHAR" | "CHARACTER VARYING" => Some(VarChar),
        "TINYTEXT" => Some(TinyText),
        "TEXT" => Some(Text),
        "MEDIUMTEXT" => Some(MediumText),
        "LONGTEXT" => Some(LongText),
        "ENUM" => Some(Enum),
        "SET" => Some(Set),
        "TINYBLOB" => Some(TinyBlob),
        "BLOB" => Some(Blob),
        "MEDIUMBLOB" => Some(MediumBlob),
        "LONGBLOB" => Some(LongBlob),
        "BINARY" => Some(Binary),
        "VARBINARY" => Some(VarBinary),
        "JSON" => Some(Json),
        "GEOMETRY" => Some(Geometry),
        _ => None,
    }
}

/// A column discovered in a source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name as reported by the engine.
    pub name: String,
    /// Semantic type, parsed from the engine's type name.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    /// Creates a column from a name and an engine-reported type name.
    pub fn new(name: impl Into<String>, type_name: &str) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::parse(type_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!(ColumnType::parse("INT"), ColumnType::Int);
        assert_eq!(ColumnType::parse("BIGINT UNSIGNED"), ColumnType::BigIntUnsigned);
        assert_eq!(ColumnType::parse("VARCHAR"), ColumnType::VarChar);
        assert_eq!(ColumnType::parse("JSON"), ColumnType::Json);
    }

    #[test]
    fn test_parse_normalizes_spelling() {
        assert_eq!(ColumnType::parse("  tinyint unsigned "), ColumnType::TinyIntUnsigned);
        assert_eq!(ColumnType::parse("TINYINT_UNSIGNED"), ColumnType::TinyIntUnsigned);
        assert_eq!(ColumnType::parse("double precision"), ColumnType::Double);
        assert_eq!(ColumnType::parse("character varying"), ColumnType::VarChar);
        assert_eq!(ColumnType::parse("bool"), ColumnType::Boolean);
        assert_eq!(ColumnType::parse("numeric"), ColumnType::Decimal);
    }

    #[test]
    fn test_parse_unknown_preserved() {
        let parsed = ColumnType::parse("vector(768)");
        assert_eq!(parsed, ColumnType::Other("vector(768)".to_string()));
        assert_eq!(parsed.to_string(), "vector(768)");
    }

    #[test]
    fn test_unsigned_on_non_numeric_is_unknown() {
        assert_eq!(
            ColumnType::parse("TEXT UNSIGNED"),
            ColumnType::Other("TEXT UNSIGNED".to_string())
        );
    }

    #[test]
    fn test_display_round_trip() {
        let types = [
            ColumnType::Bit,
            ColumnType::MediumIntUnsigned,
            ColumnType::DecimalUnsigned,
            ColumnType::DateTime,
            ColumnType::LongBlob,
            ColumnType::Geometry,
        ];
        for column_type in types {
            assert_eq!(ColumnType::parse(&column_type.to_string()), column_type);
        }
    }

    #[test]
    fn test_column_serde() {
        let column: Column = serde_json::from_str(r#"{"name": "id", "type": "INT"}"#)
            .expect("column should deserialize");
        assert_eq!(column.name, "id");
        assert_eq!(column.column_type, ColumnType::Int);

        let serialized = serde_json::to_string(&column).expect("column should serialize");
        assert!(serialized.contains(r#""type":"INT""#));
    }

    #[test]
    fn test_column_serde_unknown_type() {
        let column: Column = serde_json::from_str(r#"{"name": "embedding", "type": "VECTOR"}"#)
            .expect("column should deserialize");
        assert_eq!(
            column.column_type,
            ColumnType::Other("VECTOR".to_string())
        );
    }
}
