//! Logging for scrivener
//!
//! Installs a `tracing-subscriber` registry writing to stderr, so stdout is
//! left for the transcript itself

use scrivener_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when the configured directive string does not parse
const FALLBACK_FILTER: &str = "info";

/// Initialize the global subscriber
///
/// `filter_override` takes precedence over the configured filter, which
/// lets the CLI flag win over the config file.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &LoggingConfig, filter_override: Option<&str>) -> anyhow::Result<()> {
    let directives = filter_override.unwrap_or(&config.filter);
    let filter = build_filter(directives);

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            registry.with(fmt_layer).try_init()
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false);

            registry.with(fmt_layer).try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::debug!(filter = directives, format = ?config.format, "logging initialized");

    Ok(())
}

fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directives}' ({e}), falling back to '{FALLBACK_FILTER}'");
        EnvFilter::new(FALLBACK_FILTER)
    })
}
