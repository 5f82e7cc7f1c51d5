#![allow(dead_code)]

use ferrous_mdns_domain::{Config, HostBinding, RegisteredHost};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

pub fn host(name: &str, bindings: Vec<HostBinding>) -> RegisteredHost {
    RegisteredHost {
        name: name.to_string(),
        bindings,
    }
}

pub fn config_with_hosts(hosts: Vec<RegisteredHost>) -> Result<Config, ferrous_mdns_domain::ConfigError> {
    Config::build("test-responder", Duration::from_secs(1), hosts, false, vec![])
}

pub fn v4(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn v6(s: &str) -> Ipv6Addr {
    s.parse().unwrap()
}
