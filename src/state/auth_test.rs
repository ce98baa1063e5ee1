use super::*;
use crate::config::{AppConfig, MalformedUserPolicy};
use crate::net::client::{AUTHORIZATION, configure_api_client};
use crate::state::storage::{BrowserStorage, MemoryStorage, TOKEN_KEY, USER_KEY};

fn user(id: i64) -> UserProfile {
    UserProfile {
        id,
        name: "Choi".to_owned(),
        email: "choi@example.com".to_owned(),
        phone: None,
        date_of_birth: None,
        job_start_date: None,
        job_end_date: None,
        user_type: "admin".to_owned(),
        is_active: None,
        avatar: Some("/avatars/choi.png".to_owned()),
        created_at: "2024-01-01".to_owned(),
        updated_at: "2024-01-01".to_owned(),
    }
}

fn login(token: &str) -> LoginResponse {
    LoginResponse { token: token.to_owned(), user: user(1) }
}

fn booted(storage: &MemoryStorage) -> (SessionStore<MemoryStorage>, ApiClient) {
    let client = configure_api_client(&AppConfig::default(), storage).unwrap();
    let store = SessionStore::load(storage.clone(), MalformedUserPolicy::Discard).unwrap();
    (store, client)
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn sign_in_persists_token_and_user() {
    let storage = MemoryStorage::new();
    let (mut store, mut client) = booted(&storage);

    sign_in(&mut store, &mut client, AuthHeaderSync::BootOnly, login("abc123")).unwrap();

    assert!(store.is_authenticated());
    assert_eq!(store.user().map(|u| u.id), Some(1));
    assert!(storage.contains(TOKEN_KEY));
    assert!(storage.contains(USER_KEY));
}

#[test]
fn sign_in_boot_only_leaves_client_header_alone() {
    let storage = MemoryStorage::new();
    let (mut store, mut client) = booted(&storage);

    sign_in(&mut store, &mut client, AuthHeaderSync::BootOnly, login("abc123")).unwrap();

    assert_eq!(client.default_header(AUTHORIZATION), None);
}

#[test]
fn sign_in_live_installs_new_header() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "old")]);
    let (mut store, mut client) = booted(&storage);
    assert_eq!(client.default_header(AUTHORIZATION), Some("Bearer old"));

    sign_in(&mut store, &mut client, AuthHeaderSync::Live, login("new")).unwrap();

    assert_eq!(client.default_header(AUTHORIZATION), Some("Bearer new"));
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_clears_session() {
    let storage = MemoryStorage::new();
    let (mut store, mut client) = booted(&storage);
    sign_in(&mut store, &mut client, AuthHeaderSync::BootOnly, login("abc123")).unwrap();

    sign_out(&mut store, &mut client, AuthHeaderSync::BootOnly).unwrap();

    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn sign_out_boot_only_keeps_boot_header() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "xyz")]);
    let (mut store, mut client) = booted(&storage);

    sign_out(&mut store, &mut client, AuthHeaderSync::BootOnly).unwrap();

    assert_eq!(client.default_header(AUTHORIZATION), Some("Bearer xyz"));
}

#[test]
fn sign_out_live_removes_header() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "xyz")]);
    let (mut store, mut client) = booted(&storage);

    sign_out(&mut store, &mut client, AuthHeaderSync::Live).unwrap();

    assert_eq!(client.default_header(AUTHORIZATION), None);
}

// =============================================================
// AuthContext
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn auth_context_tracks_sign_in_and_out() {
    let session = SessionStore::load(BrowserStorage, MalformedUserPolicy::Discard).unwrap();
    let ctx = AuthContext::new(session, ApiClient::new(&AppConfig::default()), AuthHeaderSync::Live);
    assert!(!ctx.is_authenticated());

    ctx.sign_in(login("abc123")).unwrap();
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.user().map(|u| u.id), Some(1));
    assert_eq!(ctx.client().default_header(AUTHORIZATION), Some("Bearer abc123"));

    ctx.sign_out().unwrap();
    assert!(!ctx.is_authenticated());
    assert!(ctx.user().is_none());
    assert_eq!(ctx.client().default_header(AUTHORIZATION), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn auth_context_store_user_caches_profile() {
    let session = SessionStore::load(BrowserStorage, MalformedUserPolicy::Discard).unwrap();
    let ctx = AuthContext::new(session, ApiClient::new(&AppConfig::default()), AuthHeaderSync::BootOnly);
    ctx.store_user(user(9)).unwrap();
    assert_eq!(ctx.user().map(|u| u.id), Some(9));
}
