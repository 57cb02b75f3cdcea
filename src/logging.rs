use tracing_subscriber::EnvFilter;

/// Installs the global stderr subscriber. Level defaults to `info` and can
/// be overridden through `TERAVINCE_LOG`.
pub fn init() {
    let filter =
        EnvFilter::try_from_env("TERAVINCE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
