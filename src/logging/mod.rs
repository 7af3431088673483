//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for log aggregation
//! - Development: Colorful, human-readable logs
//!
//! Both write to stderr; stdout is reserved for indicator results.

use crate::config::is_production;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Initialize logging based on the environment.
///
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
