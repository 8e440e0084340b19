use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
    assert!(cfg.compression);
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("COMPRESSION", "off"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(!cfg.compression);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn values_are_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", " 9000 "), ("COMPRESSION", " ON ")])).unwrap();
    assert_eq!(cfg.port, 9000);
    assert!(cfg.compression);
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn invalid_port_is_rejected() {
    for bad in ["", "http", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", bad)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == bad), "{bad:?}: {err}");
    }
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr(_)));
}

#[test]
fn unknown_toggle_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("COMPRESSION", "maybe")])).unwrap_err();
    assert_eq!(err.to_string(), "COMPRESSION must be on or off, got \"maybe\"");
}

#[test]
fn toggle_spellings() {
    for (raw, want) in [("on", true), ("true", true), ("1", true), ("off", false), ("FALSE", false), ("0", false)] {
        assert_eq!(parse_toggle(raw), Some(want), "{raw}");
    }
}
