use arc_swap::ArcSwap;
use ferrous_mdns_domain::Config;
use std::sync::Arc;
use tracing::info;

/// Atomically swappable handle to the process configuration.
///
/// The configuration itself is immutable; a rebuild (e.g. on interface
/// hot-plug) is published with `store` and becomes visible to subsequent
/// loads. Readers holding an earlier snapshot keep a consistent view.
pub struct ConfigHandle {
    inner: ArcSwap<Config>,
}

impl ConfigHandle {
    pub fn new(config: Config) -> Self {
        Self {
            inner: ArcSwap::from_pointee(config),
        }
    }

    /// Current configuration snapshot.
    pub fn load(&self) -> Arc<Config> {
        self.inner.load_full()
    }

    /// Publish a rebuilt configuration. Callers validate before storing;
    /// a `Config` value that exists has already passed validation.
    pub fn store(&self, config: Config) {
        info!(hosts = config.hosts.len(), "publishing rebuilt configuration");
        self.inner.store(Arc::new(config));
    }
}
