//! Sign-in / sign-out flows over the session store and API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never mutate the session directly; they go through these helpers so
//! the store write-through and the `Authorization` header policy stay in one
//! place. [`AuthContext`] is the reactive handle provided to components.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::AuthHeaderSync;
use crate::net::client::ApiClient;
use crate::net::types::{LoginResponse, UserProfile};
use crate::state::session::{AppSession, SessionError, SessionStore};
use crate::state::storage::KeyValueStore;

/// Record a successful login: token, then user.
///
/// With [`AuthHeaderSync::Live`] the client's bearer header is replaced too;
/// with [`AuthHeaderSync::BootOnly`] the client is left as configured at boot.
///
/// # Errors
///
/// Returns the first [`SessionError`]; in-memory state reflects every step
/// attempted up to that point.
pub fn sign_in<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    client: &mut ApiClient,
    sync: AuthHeaderSync,
    login: LoginResponse,
) -> Result<(), SessionError> {
    if sync == AuthHeaderSync::Live {
        client.set_bearer_token(&login.token);
    }
    store.set_token(login.token)?;
    store.set_user(login.user)
}

/// Clear the session. With [`AuthHeaderSync::Live`] the bearer header is
/// removed from the client as well.
///
/// # Errors
///
/// Returns the storage failure from [`SessionStore::logout`].
pub fn sign_out<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    client: &mut ApiClient,
    sync: AuthHeaderSync,
) -> Result<(), SessionError> {
    if sync == AuthHeaderSync::Live {
        client.clear_bearer_token();
    }
    store.logout()
}

/// Reactive handle to the app's session and API client.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub session: RwSignal<AppSession>,
    pub client: RwSignal<ApiClient>,
    pub header_sync: AuthHeaderSync,
}

impl AuthContext {
    pub fn new(session: AppSession, client: ApiClient, header_sync: AuthHeaderSync) -> Self {
        Self { session: RwSignal::new(session), client: RwSignal::new(client), header_sync }
    }

    /// Tracked read of the authentication predicate.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(SessionStore::is_authenticated)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.with(|s| s.user().cloned())
    }

    /// Current client settings, for issuing a request.
    pub fn client(&self) -> ApiClient {
        self.client.get_untracked()
    }

    /// # Errors
    ///
    /// See [`sign_in`].
    pub fn sign_in(&self, login: LoginResponse) -> Result<(), SessionError> {
        let sync = self.header_sync;
        let mut result = Ok(());
        self.client.update(|client| {
            self.session.update(|store| result = sign_in(store, client, sync, login));
        });
        result
    }

    /// # Errors
    ///
    /// See [`sign_out`].
    pub fn sign_out(&self) -> Result<(), SessionError> {
        let sync = self.header_sync;
        let mut result = Ok(());
        self.client.update(|client| {
            self.session.update(|store| result = sign_out(store, client, sync));
        });
        result
    }

    /// Cache a freshly fetched profile.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::set_user`].
    pub fn store_user(&self, user: UserProfile) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.session.update(|store| result = store.set_user(user));
        result
    }
}
