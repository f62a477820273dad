use tracing_subscriber::EnvFilter;

/// Initialises the tracing subscriber. RUST_LOG takes precedence; otherwise
/// verbose mode enables info-level logs and the default stays at errors only.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
