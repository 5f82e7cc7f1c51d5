use serde::{Deserialize, Serialize};

use crate::interface::NetworkInterface;

/// Which network interfaces participate in queries and answers.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScopeConfig {
    /// Make loopback interfaces eligible for queries and answers.
    #[serde(default)]
    pub include_loopback: bool,

    /// Allow-list of interface names. Empty means every discovered
    /// interface participates, subject to the loopback gate.
    #[serde(default)]
    pub interfaces: Vec<String>,
}

impl ScopeConfig {
    /// Whether an enumerated interface participates.
    pub fn permits(&self, interface: &NetworkInterface) -> bool {
        if interface.is_loopback && !self.include_loopback {
            return false;
        }
        self.permits_name(interface.id.as_str())
    }

    /// Allow-list check alone, for interfaces the enumeration no longer
    /// reports (the loopback gate needs the enumerated flag).
    pub fn permits_name(&self, name: &str) -> bool {
        self.interfaces.is_empty() || self.interfaces.iter().any(|allowed| allowed == name)
    }
}
