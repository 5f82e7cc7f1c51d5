use ferrous_mdns_application::ports::InterfaceProvider;
use ferrous_mdns_domain::{DomainError, InterfaceId, NetworkInterface};
use std::net::IpAddr;
use tracing::debug;

/// Interface enumeration backed by the operating system.
///
/// Enumerates on every call; descriptors are not cached, so hot-plugged
/// or vanished interfaces are reflected on the next resolution.
pub struct SystemInterfaceProvider;

impl SystemInterfaceProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemInterfaceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceProvider for SystemInterfaceProvider {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError> {
        let addrs = if_addrs::get_if_addrs()
            .map_err(|e| DomainError::InterfaceEnumeration(e.to_string()))?;

        let interfaces = collect_interfaces(addrs.into_iter().map(|intf| {
            let is_loopback = intf.is_loopback();
            (intf.name.clone(), intf.index, is_loopback, intf.ip())
        }));

        debug!(count = interfaces.len(), "enumerated network interfaces");
        Ok(interfaces)
    }
}

/// Fold per-address OS records into one `NetworkInterface` per interface
/// name, preserving first-seen order. The first address of each family
/// becomes the automatically determined answer address.
pub fn collect_interfaces(
    records: impl IntoIterator<Item = (String, Option<u32>, bool, IpAddr)>,
) -> Vec<NetworkInterface> {
    let mut interfaces: Vec<NetworkInterface> = Vec::new();

    for (name, index, is_loopback, address) in records {
        let position = match interfaces.iter().position(|i| i.id.as_str() == name) {
            Some(position) => position,
            None => {
                interfaces.push(NetworkInterface::new(InterfaceId::from(name)));
                interfaces.len() - 1
            }
        };

        let interface = &mut interfaces[position];
        if interface.index.is_none() {
            interface.index = index;
        }
        interface.is_loopback |= is_loopback;
        match address {
            IpAddr::V4(addr) => interface.ipv4.push(addr),
            IpAddr::V6(addr) => interface.ipv6.push(addr),
        }
    }

    interfaces
}
