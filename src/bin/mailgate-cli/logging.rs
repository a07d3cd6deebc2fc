use tracing_subscriber::EnvFilter;

/// Subscriber fmt sur stderr; `RUST_LOG` prend le pas sur `--verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { "mailgate_lib=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
