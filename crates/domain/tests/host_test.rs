mod helpers;

use ferrous_mdns_domain::{HostBinding, InterfaceId, NetworkInterface, RegisteredHost};
use helpers::{host, v4, v6};

// ── binding selection ──────────────────────────────────────────────────────

#[test]
fn test_specific_binding_found_by_interface() {
    let host = host(
        "host.local",
        vec![
            HostBinding::fallback().with_ipv4(v4("192.168.1.2")),
            HostBinding::for_interface("eth0").with_ipv4(v4("10.0.0.5")),
        ],
    );

    let binding = host.specific_binding(&InterfaceId::from("eth0")).unwrap();
    assert_eq!(binding.address_ipv4, Some(v4("10.0.0.5")));
}

#[test]
fn test_specific_binding_ignores_fallback() {
    let host = host("host.local", vec![HostBinding::fallback()]);
    assert!(host.specific_binding(&InterfaceId::from("eth0")).is_none());
}

#[test]
fn test_fallback_binding_found_regardless_of_position() {
    let first = host(
        "host.local",
        vec![HostBinding::fallback().with_ipv6(v6("fe80::1")), HostBinding::for_interface("eth0")],
    );
    let last = host(
        "host.local",
        vec![HostBinding::for_interface("eth0"), HostBinding::fallback().with_ipv6(v6("fe80::1"))],
    );

    assert_eq!(
        first.fallback_binding().unwrap().address_ipv6,
        Some(v6("fe80::1"))
    );
    assert_eq!(
        last.fallback_binding().unwrap().address_ipv6,
        Some(v6("fe80::1"))
    );
}

#[test]
fn test_no_fallback_binding_when_none_declared() {
    let host = host("host.local", vec![HostBinding::for_interface("eth0")]);
    assert!(host.fallback_binding().is_none());
}

// ── per-host validation ────────────────────────────────────────────────────

#[test]
fn test_validate_accepts_one_binding_per_interface_plus_fallback() {
    let host = host(
        "host.local",
        vec![
            HostBinding::for_interface("eth0"),
            HostBinding::for_interface("wlan0"),
            HostBinding::fallback(),
        ],
    );
    assert!(host.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_name() {
    assert!(RegisteredHost::new("").validate().is_err());
}

#[test]
fn test_validate_rejects_repeated_interface() {
    let host = host(
        "host.local",
        vec![HostBinding::for_interface("eth0"), HostBinding::for_interface("eth0")],
    );
    assert!(host.validate().is_err());
}

// ── interface snapshot ─────────────────────────────────────────────────────

#[test]
fn test_primary_address_is_first_of_family() {
    let mut interface = NetworkInterface::new(InterfaceId::from("eth0"));
    interface.ipv4 = vec![v4("10.0.0.5"), v4("10.0.0.6")];
    interface.ipv6 = vec![v6("fe80::1")];

    assert_eq!(interface.primary_ipv4(), Some(v4("10.0.0.5")));
    assert_eq!(interface.primary_ipv6(), Some(v6("fe80::1")));
}

#[test]
fn test_primary_address_absent_on_empty_family() {
    let interface = NetworkInterface::new(InterfaceId::from("eth0"));
    assert!(interface.primary_ipv4().is_none());
    assert!(interface.primary_ipv6().is_none());
}
