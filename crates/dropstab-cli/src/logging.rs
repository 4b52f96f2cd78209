//! Logging initialization for the `dropstab` binary
//!
//! Nothing is logged unless asked for. Priority order:
//! 1. CLI flags (`-v` repeated; `-vvvv` reaches debug)
//! 2. RUST_LOG environment variable
//!
//! The default filter is used when RUST_LOG holds directives that do not parse.

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives requested by the user, or `None` when logging stays off
pub fn requested_filter<L: LogLevel>(
    verbosity: &Verbosity<L>,
    rust_log: Option<&str>,
) -> Option<String> {
    if let Some(level) = verbosity.log_level() {
        return Some(level.to_string().to_ascii_lowercase());
    }
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .map(str::to_string)
}

/// Install a compact stderr subscriber for the given directives
pub fn init_logging(directives: &str, default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Initialize logging only when requested via flags or RUST_LOG
///
/// Returns `true` if a subscriber was installed. Command output goes to
/// stdout and stays clean by default.
pub fn init_cli_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<bool> {
    let rust_log = std::env::var("RUST_LOG").ok();
    match requested_filter(verbosity, rust_log.as_deref()) {
        Some(directives) => {
            init_logging(&directives, default_filter)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
