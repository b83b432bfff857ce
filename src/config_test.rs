use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.classic_dir, default_classic_dir());
}

#[test]
fn from_lookup_reads_port_and_classic_dir() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("CLASSIC_DIR", "/srv/classic")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.classic_dir, PathBuf::from("/srv/classic"));
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref raw) if raw == "not-a-port"));
}

#[test]
fn from_lookup_blank_classic_dir_uses_default() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("CLASSIC_DIR", "  ")])).unwrap();
    assert_eq!(cfg.classic_dir, default_classic_dir());
}

#[test]
fn default_classic_dir_contains_pages() {
    let dir = default_classic_dir();
    assert!(dir.join("index.html").is_file());
    assert!(dir.join("chat.html").is_file());
}
