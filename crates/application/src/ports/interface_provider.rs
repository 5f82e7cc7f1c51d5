use ferrous_mdns_domain::{DomainError, InterfaceId, NetworkInterface};

/// Enumeration of the host's network interfaces and their addresses.
///
/// Synchronous: binding resolution is a pure read with no suspension
/// points, and implementations are expected to answer from an OS snapshot.
pub trait InterfaceProvider: Send + Sync {
    /// All currently active interfaces.
    fn interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError>;

    /// The interface with the given identity, or `None` if the OS no longer
    /// reports it. Default implementation scans `interfaces()`.
    fn lookup(&self, id: &InterfaceId) -> Result<Option<NetworkInterface>, DomainError> {
        Ok(self.interfaces()?.into_iter().find(|i| &i.id == id))
    }
}
