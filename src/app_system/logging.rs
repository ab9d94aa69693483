/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when it is set and valid; otherwise `default_filter` is
/// used, e.g. `"info"` or `"storefront_cart=debug"`.
///
/// ```bash
/// RUST_LOG=storefront_cart::cart=debug cargo run
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
