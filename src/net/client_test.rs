use super::*;
use crate::state::storage::MemoryStorage;

// =============================================================
// ApiClient defaults
// =============================================================

#[test]
fn new_client_uses_config_and_json_headers() {
    let client = ApiClient::new(&AppConfig::default());
    assert_eq!(client.base_url(), "http://preservation.test");
    assert!(client.with_credentials());
    assert_eq!(client.default_header("Content-Type"), Some("application/json"));
    assert_eq!(client.default_header("Accept"), Some("application/json"));
    assert_eq!(client.default_header(AUTHORIZATION), None);
}

#[test]
fn bearer_token_can_be_set_and_cleared() {
    let mut client = ApiClient::new(&AppConfig::default());
    client.set_bearer_token("abc123");
    assert_eq!(client.default_header(AUTHORIZATION), Some("Bearer abc123"));
    client.clear_bearer_token();
    assert_eq!(client.default_header(AUTHORIZATION), None);
    assert_eq!(client.default_headers().len(), 2);
}

// =============================================================
// url
// =============================================================

#[test]
fn url_joins_with_single_slash() {
    let client = ApiClient::new(&AppConfig::default());
    assert_eq!(client.url("/api/login"), "http://preservation.test/api/login");
    assert_eq!(client.url("api/user"), "http://preservation.test/api/user");
    assert_eq!(client.url(""), "http://preservation.test");
}

#[test]
fn url_handles_base_with_path_prefix() {
    let config = AppConfig { api_base_url: "https://example.test/v1/".to_owned(), ..AppConfig::default() };
    let client = ApiClient::new(&config);
    assert_eq!(client.url("/api/logout"), "https://example.test/v1/api/logout");
}

// =============================================================
// configure_api_client
// =============================================================

#[test]
fn configure_installs_persisted_token() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "xyz")]);
    let client = configure_api_client(&AppConfig::default(), &storage).unwrap();
    assert_eq!(client.default_header(AUTHORIZATION), Some("Bearer xyz"));
}

#[test]
fn configure_without_token_leaves_header_unset() {
    let client = configure_api_client(&AppConfig::default(), &MemoryStorage::new()).unwrap();
    assert_eq!(client.default_header(AUTHORIZATION), None);
}

#[test]
fn configure_ignores_empty_token() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "")]);
    let client = configure_api_client(&AppConfig::default(), &storage).unwrap();
    assert_eq!(client.default_header(AUTHORIZATION), None);
}

#[test]
fn configure_is_a_snapshot_of_boot_time_storage() {
    let storage = MemoryStorage::new();
    let client = configure_api_client(&AppConfig::default(), &storage).unwrap();
    storage.set(TOKEN_KEY, "later").unwrap();
    assert_eq!(client.default_header(AUTHORIZATION), None);
}
