//! Thin process entry point for dbsource source adapters.
//!
//! This binary owns no sync protocol. It exposes the three adapter
//! boundary calls — connection resolution, cursor classification, and
//! namespace exclusion — as subcommands that read JSON documents and
//! write JSON to stdout, for the external runner and for operators
//! debugging a job's configuration.
//!
//! # Security Guarantees
//! - Passwords are redacted in output unless explicitly requested
//! - No credentials appear in logs or error messages
//! - The binary never opens a database connection

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dbsource_core::{
    Column, ConnectionDescriptor, SourceAdapter, SourceConfig, SourceKind, create_adapter,
    init_logging,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "dbsource")]
#[command(about = "Connection resolution and cursor classification for source connectors")]
#[command(version)]
#[command(long_about = "
dbsource - source connector configuration toolkit

Resolves job configuration documents into driver connection parameters,
classifies discovered columns for incremental cursor use, and reports
engine-internal namespaces.

This tool never connects to a database: the resolved descriptor is meant
for the extraction framework's driver factory. Passwords are redacted in
all output unless --include-secrets is passed.

SUPPORTED SOURCES:
- TiDB (tidb)
- MySQL / MariaDB (mysql) [if compiled with --features mysql]

EXAMPLES:
  dbsource resolve --source tidb --config job.json
  dbsource cursor-fields --source tidb --columns discovered.json
  dbsource namespaces --source tidb
  dbsource check-config --config job.json
")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a config document into a connection descriptor
    Resolve(ResolveArgs),
    /// List the discovered columns eligible to drive an incremental cursor
    CursorFields(CursorFieldsArgs),
    /// Print the engine-internal namespaces hidden from discovery
    Namespaces(SourceArgs),
    /// Shape-check a config document without resolving it
    CheckConfig(ConfigArgs),
}

#[derive(Args)]
struct ResolveArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Emit the password verbatim instead of a mask
    #[arg(long)]
    include_secrets: bool,
}

#[derive(Args)]
struct CursorFieldsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Path to a JSON array of discovered columns ({"name", "type"})
    #[arg(long)]
    columns: PathBuf,
}

#[derive(Args)]
struct SourceArgs {
    /// Source engine kind
    #[arg(long, default_value = "tidb")]
    source: String,
}

#[derive(Args)]
struct ConfigArgs {
    /// Path to the job's source config document
    #[arg(long, env = "DBSOURCE_CONFIG")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose, cli.global.quiet)?;

    match cli.command {
        Command::Resolve(args) => run_resolve(&args),
        Command::CursorFields(args) => run_cursor_fields(&args),
        Command::Namespaces(args) => run_namespaces(&args),
        Command::CheckConfig(args) => run_check_config(&args),
    }
}

fn run_resolve(args: &ResolveArgs) -> anyhow::Result<()> {
    let adapter = adapter_for(&args.source)?;
    info!("starting connection resolution for source: {}", adapter.source_kind());

    let config = load_config(&args.config.config)?;
    let descriptor = adapter.build_connection(&config);
    let output = descriptor_output(&descriptor, args.include_secrets);
    println!("{}", serde_json::to_string_pretty(&output)?);

    info!("completed connection resolution for source: {}", adapter.source_kind());
    Ok(())
}

fn run_cursor_fields(args: &CursorFieldsArgs) -> anyhow::Result<()> {
    let adapter = adapter_for(&args.source)?;
    info!("starting cursor classification for source: {}", adapter.source_kind());

    let columns = load_columns(&args.columns)?;
    let fields = adapter.cursor_fields(&columns);
    info!(
        "{} of {} discovered columns are cursor-eligible",
        fields.len(),
        columns.len()
    );
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}

fn run_namespaces(args: &SourceArgs) -> anyhow::Result<()> {
    let adapter = adapter_for(args)?;
    println!(
        "{}",
        serde_json::to_string_pretty(adapter.excluded_namespaces())?
    );
    Ok(())
}

fn run_check_config(args: &ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    info!("config document is well-formed: {config}");
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "valid": true,
            "source": config.to_string(),
        }))?
    );
    Ok(())
}

fn adapter_for(args: &SourceArgs) -> anyhow::Result<Box<dyn SourceAdapter>> {
    let kind: SourceKind = args.source.parse()?;
    Ok(create_adapter(kind)?)
}

fn load_config(path: &Path) -> anyhow::Result<SourceConfig> {
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    Ok(SourceConfig::from_json(&document)?)
}

fn load_columns(path: &Path) -> anyhow::Result<Vec<Column>> {
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read columns file: {}", path.display()))?;
    serde_json::from_str(&document)
        .with_context(|| format!("Failed to parse columns file: {}", path.display()))
}

fn descriptor_output(descriptor: &ConnectionDescriptor, include_secrets: bool) -> ConnectionDescriptor {
    if include_secrets {
        descriptor.clone()
    } else {
        descriptor.redacted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_config_round_trip() {
        let file = write_temp(
            r#"{"host": "db.local", "port": 4000, "database": "shop", "username": "u", "password": "p"}"#,
        );
        let config = load_config(file.path()).expect("config should load");
        assert_eq!(config.host, "db.local");
        assert_eq!(config.password.as_deref(), Some("p"));
    }

    #[test]
    fn test_load_config_reports_shape_errors() {
        let file = write_temp(r#"{"host": "db.local"}"#);
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_columns() {
        let file = write_temp(r#"[{"name": "id", "type": "INT"}, {"name": "j", "type": "JSON"}]"#);
        let columns = load_columns(file.path()).expect("columns should load");
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "id");
    }

    #[test]
    fn test_descriptor_output_redacts_by_default() {
        let descriptor = ConnectionDescriptor {
            username: "u".to_string(),
            connection_url: "mysql://db.local:4000/shop?".to_string(),
            password: Some("hunter2".to_string()),
        };

        let redacted = descriptor_output(&descriptor, false);
        assert_eq!(redacted.password.as_deref(), Some("****"));

        let verbatim = descriptor_output(&descriptor, true);
        assert_eq!(verbatim.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_adapter_for_rejects_unknown_kind() {
        let args = SourceArgs {
            source: "oracle".to_string(),
        };
        assert!(adapter_for(&args).is_err());
    }
}
