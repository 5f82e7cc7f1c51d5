use crate::ports::InterfaceProvider;
use crate::services::ConfigHandle;
use ferrous_mdns_domain::{BindingAnswer, InterfaceId, Resolution};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::{trace, warn};

/// Decides which addresses to answer with for one (host, interface) query.
///
/// Pure read over one configuration snapshot; safe to call concurrently
/// from any number of engine workers without coordination. Every input
/// produces a `Resolution` — never an error.
pub struct ResolveBindingUseCase {
    config: Arc<ConfigHandle>,
    interfaces: Arc<dyn InterfaceProvider>,
}

impl ResolveBindingUseCase {
    pub fn new(config: Arc<ConfigHandle>, interfaces: Arc<dyn InterfaceProvider>) -> Self {
        Self { config, interfaces }
    }

    /// `interface` is the interface the query arrived on; `None` means the
    /// query carried no interface context.
    pub fn execute(&self, host_name: &str, interface: Option<&InterfaceId>) -> Resolution {
        let config = self.config.load();

        let Some(host) = config.host(host_name) else {
            trace!(host = host_name, "no registered host for query name");
            return Resolution::UnknownHost;
        };

        // Automatically determined addresses for the receiving interface.
        // Without interface context there are none, and only override
        // addresses can answer.
        let mut auto_ipv4: Option<Ipv4Addr> = None;
        let mut auto_ipv6: Option<Ipv6Addr> = None;

        if let Some(id) = interface {
            match self.interfaces.lookup(id) {
                Ok(Some(target)) => {
                    if !config.scope.permits(&target) {
                        trace!(interface = %id, "interface excluded from scope");
                        return Resolution::OutOfScope;
                    }
                    auto_ipv4 = target.primary_ipv4();
                    auto_ipv6 = target.primary_ipv6();
                }
                Ok(None) => {
                    // Interface gone between enumeration and resolution;
                    // the allow-list still applies by name.
                    if !config.scope.permits_name(id.as_str()) {
                        return Resolution::OutOfScope;
                    }
                }
                Err(e) => {
                    warn!(error = %e, interface = %id, "interface lookup failed, answering with overrides only");
                    if !config.scope.permits_name(id.as_str()) {
                        return Resolution::OutOfScope;
                    }
                }
            }
        }

        let specific = interface.and_then(|id| host.specific_binding(id));
        let fallback = host.fallback_binding();

        // Each family independently: specific override, else fallback
        // override, else the interface's own address.
        let ipv4 = specific
            .and_then(|b| b.address_ipv4)
            .or_else(|| fallback.and_then(|b| b.address_ipv4))
            .or(auto_ipv4);
        let ipv6 = specific
            .and_then(|b| b.address_ipv6)
            .or_else(|| fallback.and_then(|b| b.address_ipv6))
            .or(auto_ipv6);

        trace!(host = %host.name, ipv4 = ?ipv4, ipv6 = ?ipv6, "resolved binding");
        Resolution::Answer(BindingAnswer::new(ipv4, ipv6))
    }
}
