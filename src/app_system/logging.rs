use tracing_subscriber::EnvFilter;

/// Configure tracing once for the entire process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (from the config file)
/// is used, falling back to `info` if it does not parse.
///
/// ```bash
/// RUST_LOG=debug qr_inventory demo
/// RUST_LOG=qr_inventory::actor_framework=debug,info qr_inventory scan
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
