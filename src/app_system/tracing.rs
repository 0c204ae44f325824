use tracing_subscriber::EnvFilter;

/// Centralized tracing configuration for the whole application.
///
/// Honors `RUST_LOG`; defaults to `info` when unset.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
