use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Stable identity of a network interface, keyed by its OS name.
///
/// Interface descriptors are re-enumerated between calls, so bindings and
/// lookups are keyed by name rather than by descriptor identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct InterfaceId(String);

impl InterfaceId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InterfaceId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for InterfaceId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Snapshot of one network interface as reported by the enumeration port.
///
/// The automatically determined address for a family is the first address
/// of that family assigned to the interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub id: InterfaceId,

    /// OS interface index, when the platform reports one.
    pub index: Option<u32>,

    pub is_loopback: bool,

    pub ipv4: Vec<Ipv4Addr>,

    pub ipv6: Vec<Ipv6Addr>,
}

impl NetworkInterface {
    pub fn new(id: InterfaceId) -> Self {
        Self {
            id,
            index: None,
            is_loopback: false,
            ipv4: vec![],
            ipv6: vec![],
        }
    }

    pub fn primary_ipv4(&self) -> Option<Ipv4Addr> {
        self.ipv4.first().copied()
    }

    pub fn primary_ipv6(&self) -> Option<Ipv6Addr> {
        self.ipv6.first().copied()
    }
}
