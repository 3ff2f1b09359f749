use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.allowed_origins, vec!["http://localhost:3000".to_owned()]);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("ITEMS_HOST", "127.0.0.1"),
        ("PORT", " 9100 "),
        ("ITEMS_ALLOWED_ORIGINS", "http://localhost:3000/, https://items.example.test ,,"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:9100");
    assert_eq!(
        cfg.allowed_origins,
        vec!["http://localhost:3000".to_owned(), "https://items.example.test".to_owned()]
    );
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".into()));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn empty_origin_list_allows_nothing() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("ITEMS_ALLOWED_ORIGINS", "")])).unwrap();
    assert!(cfg.allowed_origins.is_empty());
}
