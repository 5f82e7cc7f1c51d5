use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::time::Duration;

/// Identity and query cadence of one responder/client instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponderConfig {
    /// Name used for logging and diagnostics. Empty means the runner picks
    /// one (the CLI fills in the machine hostname).
    #[serde(default)]
    pub name: String,

    /// How often an unanswered query is re-issued, in milliseconds.
    /// Must be positive.
    #[serde(default = "default_query_interval_ms")]
    pub query_interval_ms: u64,

    /// IPv4 multicast group the transport binds for A queries/answers.
    #[serde(default = "default_group_ipv4")]
    pub group_ipv4: SocketAddr,

    /// IPv6 multicast group, used for AAAA queries/answers.
    #[serde(default = "default_group_ipv6")]
    pub group_ipv6: SocketAddr,
}

impl ResponderConfig {
    pub fn query_interval(&self) -> Duration {
        Duration::from_millis(self.query_interval_ms)
    }
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            query_interval_ms: default_query_interval_ms(),
            group_ipv4: default_group_ipv4(),
            group_ipv6: default_group_ipv6(),
        }
    }
}

fn default_query_interval_ms() -> u64 {
    1000
}

fn default_group_ipv4() -> SocketAddr {
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(224, 0, 0, 0), MDNS_PORT))
}

fn default_group_ipv6() -> SocketAddr {
    SocketAddr::V6(SocketAddrV6::new(
        Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 0),
        MDNS_PORT,
        0,
        0,
    ))
}

const MDNS_PORT: u16 = 5353;
