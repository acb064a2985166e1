//! Shared logging setup for dbsource binaries.

use crate::Result;
use tracing_subscriber::EnvFilter;

/// Initializes structured logging based on verbosity level.
///
/// The `RUST_LOG` environment variable, when set, overrides the
/// flag-derived level entirely.
///
/// # Arguments
/// * `verbose` - Verbosity level (0=INFO, 1=DEBUG, 2+=TRACE)
/// * `quiet` - If true, only show ERROR level logs
///
/// # Errors
/// Returns a configuration error if a global subscriber is already set.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| {
            crate::error::DbSourceError::configuration(format!(
                "Failed to initialize logging: {e}"
            ))
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    // A global subscriber can only be installed once per test process, so
    // only the level mapping is exercised here.

    #[test]
    fn test_verbosity_mapping() {
        let cases = [
            ((true, 0), "error"),
            ((true, 3), "error"),
            ((false, 0), "info"),
            ((false, 1), "debug"),
            ((false, 2), "trace"),
        ];

        for ((quiet, verbose), expected) in cases {
            let level = match (quiet, verbose) {
                (true, _) => "error",
                (false, 0) => "info",
                (false, 1) => "debug",
                (false, _) => "trace",
            };
            assert_eq!(level, expected, "quiet={quiet}, verbose={verbose}");
        }
    }
}
