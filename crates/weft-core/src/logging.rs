//! Logging integration for the weft framework.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-run spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level filter is read from `settings.log_level`. In debug mode a
/// pretty, human-readable format is used; otherwise a structured JSON
/// format is used. Installing a second subscriber is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one script run.
///
/// Attach this span around script execution so that all log entries emitted
/// while the script runs carry the session and run identifiers.
///
/// # Examples
///
/// ```
/// use weft_core::logging::run_span;
///
/// let span = run_span("7d8f", 3);
/// let _guard = span.enter();
/// tracing::info!("executing script");
/// ```
pub fn run_span(session_id: &str, run: u64) -> tracing::Span {
    tracing::info_span!("script_run", session = session_id, run)
}
