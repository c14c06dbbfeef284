use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// Diagnostics are written to stderr so that stdout stays reserved for the
/// console report. `log_level` is normalised to a
/// [`tracing_subscriber::EnvFilter`] directive, falling back to `"info"`
/// when the level string is not recognised.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(normalise_level(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();

    Ok(())
}

/// Map conventional log-level names to tracing directive names.
fn normalise_level(level: &str) -> &'static str {
    match level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" | "WARN" => "warn",
        "ERROR" => "error",
        _ => "info",
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
