use async_trait::async_trait;
use bytes::Bytes;
use ferrous_mdns_domain::{DomainError, InterfaceId};
use std::net::SocketAddr;

/// A query or answer received from one of the multicast groups.
#[derive(Debug, Clone)]
pub struct InboundPacket {
    pub payload: Bytes,
    pub source: SocketAddr,
    /// Receiving interface, when the OS reports it. Resolution treats an
    /// untagged packet as having no interface context.
    pub interface: Option<InterfaceId>,
}

/// A packet to transmit on one of the multicast groups.
#[derive(Debug, Clone)]
pub struct OutboundPacket {
    pub payload: Bytes,
    pub destination: SocketAddr,
    /// Interface to send on; `None` lets the OS route.
    pub interface: Option<InterfaceId>,
}

/// Boundary to the UDP multicast sockets.
///
/// The transport owns the sockets bound to the configured groups (by
/// default `224.0.0.0:5353` and `[FF02::]:5353`); the protocol engine
/// driving it lives outside this crate.
#[async_trait]
pub trait MulticastTransport: Send + Sync {
    async fn send(&self, packet: OutboundPacket) -> Result<(), DomainError>;

    async fn recv(&self) -> Result<InboundPacket, DomainError>;
}
