use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, HostConfig { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT });
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidEnv { var: "PORT", ref value } if value == "http"));
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = HostConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidEnv { var: "BIND_ADDR", .. }));
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost\"");
}
