use super::*;
use crate::config::MalformedUserPolicy;
use crate::net::client::AUTHORIZATION;
use crate::state::storage::{MemoryStorage, TOKEN_KEY, USER_KEY};

#[test]
fn boot_with_empty_storage_is_anonymous() {
    let booted = boot(&AppConfig::default(), MemoryStorage::new()).unwrap();
    assert!(!booted.session.is_authenticated());
    assert_eq!(booted.client.default_header(AUTHORIZATION), None);
}

#[test]
fn boot_restores_token_into_session_and_client() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "xyz")]);
    let booted = boot(&AppConfig::default(), storage).unwrap();
    assert!(booted.session.is_authenticated());
    assert!(booted.session.user().is_none());
    assert_eq!(booted.client.default_header(AUTHORIZATION), Some("Bearer xyz"));
}

#[test]
fn boot_honors_strict_malformed_user_policy() {
    let storage = MemoryStorage::with_entries([(USER_KEY, "[]")]);
    let config = AppConfig { malformed_user: MalformedUserPolicy::Fail, ..AppConfig::default() };
    let err = boot(&config, storage).unwrap_err();
    assert!(matches!(err, SessionError::MalformedUser { .. }));
}

#[test]
fn boot_discards_malformed_user_by_default() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "xyz"), (USER_KEY, "[]")]);
    let booted = boot(&AppConfig::default(), storage).unwrap();
    assert!(booted.session.user().is_none());
    assert!(booted.session.is_authenticated());
}
