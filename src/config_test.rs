use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 5000);
    assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.site_dir, PathBuf::from("dist"));
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
}

#[test]
fn overrides_apply() {
    let config =
        HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("SITE_DIR", "public")]))
            .unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.site_dir, PathBuf::from("public"));
}

#[test]
fn blank_site_dir_uses_default() {
    let config = HostConfig::from_lookup(lookup(&[("SITE_DIR", "  ")])).unwrap();
    assert_eq!(config.site_dir, PathBuf::from("dist"));
}

#[test]
fn invalid_port_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".into() });

    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn invalid_bind_addr_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR \"localhost\": expected an IP address");
}
