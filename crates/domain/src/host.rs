use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::config::ConfigError;
use crate::interface::InterfaceId;

/// One answer rule for a registered host.
///
/// Address fields override the automatically determined address for the
/// interface the binding applies to. A binding without an interface is the
/// fallback and applies to every interface not covered by a specific binding.
/// The interface is unique within a host's binding list; to publish both A
/// and AAAA overrides, set both address fields on the one binding for that
/// interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostBinding {
    #[serde(default)]
    pub interface: Option<InterfaceId>,

    #[serde(default)]
    pub address_ipv4: Option<Ipv4Addr>,

    #[serde(default)]
    pub address_ipv6: Option<Ipv6Addr>,
}

impl HostBinding {
    /// Binding that applies only to the named interface.
    pub fn for_interface(interface: impl Into<InterfaceId>) -> Self {
        Self {
            interface: Some(interface.into()),
            address_ipv4: None,
            address_ipv6: None,
        }
    }

    /// The fallback binding, applying to every interface without a
    /// specific binding.
    pub fn fallback() -> Self {
        Self {
            interface: None,
            address_ipv4: None,
            address_ipv6: None,
        }
    }

    pub fn with_ipv4(mut self, address: Ipv4Addr) -> Self {
        self.address_ipv4 = Some(address);
        self
    }

    pub fn with_ipv6(mut self, address: Ipv6Addr) -> Self {
        self.address_ipv6 = Some(address);
        self
    }

    pub fn is_fallback(&self) -> bool {
        self.interface.is_none()
    }
}

/// A name this instance generates answers for, with its binding list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegisteredHost {
    pub name: String,

    #[serde(default)]
    pub bindings: Vec<HostBinding>,
}

impl RegisteredHost {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: vec![],
        }
    }

    pub fn with_binding(mut self, binding: HostBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// The binding declared for exactly this interface, if any.
    ///
    /// Declaration order carries no meaning for resolution; the interface is
    /// unique within the list, enforced by [`RegisteredHost::validate`].
    pub fn specific_binding(&self, interface: &InterfaceId) -> Option<&HostBinding> {
        self.bindings
            .iter()
            .find(|b| b.interface.as_ref() == Some(interface))
    }

    /// The fallback binding, if one is declared.
    pub fn fallback_binding(&self) -> Option<&HostBinding> {
        self.bindings.iter().find(|b| b.is_fallback())
    }

    /// Per-host construction-time invariants: non-empty name, at most one
    /// binding per interface, at most one fallback.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyHostName);
        }

        let mut seen: HashSet<&InterfaceId> = HashSet::new();
        let mut has_fallback = false;
        for binding in &self.bindings {
            match &binding.interface {
                Some(interface) => {
                    if !seen.insert(interface) {
                        return Err(ConfigError::DuplicateBinding {
                            host: self.name.clone(),
                            interface: interface.clone(),
                        });
                    }
                }
                None => {
                    if has_fallback {
                        return Err(ConfigError::DuplicateFallback(self.name.clone()));
                    }
                    has_fallback = true;
                }
            }
        }

        Ok(())
    }
}
