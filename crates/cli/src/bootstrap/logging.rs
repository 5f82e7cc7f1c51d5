use ferrous_mdns_domain::Config;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. `RUST_LOG` wins over the configured
/// level, same as any other tracing-based binary.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
