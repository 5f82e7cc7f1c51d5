mod interface_provider;
mod multicast_transport;

pub use interface_provider::InterfaceProvider;
pub use multicast_transport::{InboundPacket, MulticastTransport, OutboundPacket};

// Re-export for convenience
pub use ferrous_mdns_domain::{InterfaceId, NetworkInterface};
