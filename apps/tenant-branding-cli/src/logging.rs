use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// machine-readable.
///
/// Precedence: `RUST_LOG` -> `-v` count -> `logging.level`.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig, verbose: u8, json: bool) -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive),
        _ => EnvFilter::try_new(level_directive(config, verbose)),
    }
    .context("invalid log filter directive")?;

    let json = json || config.json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .try_init()
        .context("failed to install tracing subscriber")
}

fn level_directive(config: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => &config.level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
