use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. Call once at process start;
/// library code only emits events and never installs a subscriber itself.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
