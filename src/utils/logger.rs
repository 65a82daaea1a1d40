use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The filter honors `RUST_LOG`, defaulting to `info` when unset. A second
/// call is a no-op rather than a panic, so tests can call this freely.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
