use super::*;

#[test]
fn default_points_at_local_server_without_timeouts() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, None);
    assert_eq!(cfg.connect_timeout_secs, None);
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ClientConfig::new("https://items.example.test/api//").unwrap();
    assert_eq!(cfg.base_url, "https://items.example.test/api");
}

#[test]
fn new_rejects_non_http_scheme() {
    let err = ClientConfig::new("ftp://example.test").unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://example.test".into()));
}

#[test]
fn timeouts_are_applied_when_positive() {
    let cfg = ClientConfig::default()
        .with_request_timeout(Some(30))
        .unwrap()
        .with_connect_timeout(Some(5))
        .unwrap();
    assert_eq!(cfg.request_timeout_secs, Some(30));
    assert_eq!(cfg.connect_timeout_secs, Some(5));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ClientConfig::default().with_request_timeout(Some(0)).unwrap_err();
    assert!(err.to_string().contains("request"));
}
