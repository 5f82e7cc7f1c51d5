#![allow(dead_code)]

use ferrous_mdns_application::ports::InterfaceProvider;
use ferrous_mdns_domain::{DomainError, InterfaceId, NetworkInterface};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::RwLock;

pub struct MockInterfaceProvider {
    interfaces: RwLock<Vec<NetworkInterface>>,
    should_fail: RwLock<bool>,
}

impl MockInterfaceProvider {
    pub fn new() -> Self {
        Self {
            interfaces: RwLock::new(vec![]),
            should_fail: RwLock::new(false),
        }
    }

    pub fn with_interfaces(interfaces: Vec<NetworkInterface>) -> Self {
        Self {
            interfaces: RwLock::new(interfaces),
            should_fail: RwLock::new(false),
        }
    }

    pub fn add(&self, interface: NetworkInterface) {
        self.interfaces.write().unwrap().push(interface);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }
}

impl Default for MockInterfaceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceProvider for MockInterfaceProvider {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::InterfaceEnumeration(
                "Mock enumeration failed".to_string(),
            ));
        }
        Ok(self.interfaces.read().unwrap().clone())
    }
}

pub fn eth(name: &str, index: u32, ipv4: Vec<Ipv4Addr>, ipv6: Vec<Ipv6Addr>) -> NetworkInterface {
    NetworkInterface {
        id: InterfaceId::from(name),
        index: Some(index),
        is_loopback: false,
        ipv4,
        ipv6,
    }
}

pub fn loopback() -> NetworkInterface {
    NetworkInterface {
        id: InterfaceId::from("lo"),
        index: Some(1),
        is_loopback: true,
        ipv4: vec![Ipv4Addr::LOCALHOST],
        ipv6: vec![Ipv6Addr::LOCALHOST],
    }
}

pub fn v4(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn v6(s: &str) -> Ipv6Addr {
    s.parse().unwrap()
}
