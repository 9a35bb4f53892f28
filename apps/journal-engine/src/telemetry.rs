//! Tracing Setup
//!
//! Installs a `tracing-subscriber` formatter driven by [`LoggingConfig`].
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides the configured level when set
//! - `observability.logging.format`: `json` (default) or `pretty`
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_engine::config::LoggingConfig;
//! use journal_engine::telemetry::init_tracing;
//!
//! init_tracing(&LoggingConfig::default());
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, then the configured level.
///
/// An unparsable configured level falls back to `info`.
#[must_use]
pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// Returns `false` if a subscriber was already installed (e.g. by a test
/// harness); the existing one is kept.
pub fn init_tracing(logging: &LoggingConfig) -> bool {
    let span_events = if logging.include_spans {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_span_events(span_events);

    let installed = if logging.format == "pretty" {
        builder.pretty().try_init()
    } else {
        builder.json().with_current_span(logging.include_spans).try_init()
    };

    installed.is_ok()
}
