//! Authentication session: bearer token plus cached user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for "is someone signed in". The navigation
//! guard reads `is_authenticated()` on every transition; sign-in/sign-out
//! flows are the only writers.
//!
//! PERSISTENCE
//! ===========
//! Every mutator updates memory first and then writes through to the
//! [`KeyValueStore`] under [`TOKEN_KEY`]/[`USER_KEY`]. A failed write is
//! returned to the caller but the in-memory change is kept, so the session
//! stays signed in until the next reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::MalformedUserPolicy;
use crate::net::types::UserProfile;
use crate::state::storage::{BrowserStorage, KeyValueStore, StorageError, TOKEN_KEY, USER_KEY};

/// Session backed by `window.localStorage`, as used by the running app.
pub type AppSession = SessionStore<BrowserStorage>;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted `user` entry is not a valid profile.
    #[error("stored user profile is malformed: {source}")]
    MalformedUser {
        #[source]
        source: serde_json::Error,
    },

    #[error("user profile could not be serialized: {source}")]
    SerializeUser {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    token: Option<String>,
    user: Option<UserProfile>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Initialize from whatever `storage` holds. No network validation.
    ///
    /// # Errors
    ///
    /// Fails when storage cannot be read, or when the stored user is
    /// malformed and `policy` is [`MalformedUserPolicy::Fail`].
    pub fn load(storage: S, policy: MalformedUserPolicy) -> Result<Self, SessionError> {
        let token = storage.get(TOKEN_KEY)?;
        let user = match storage.get(USER_KEY)? {
            None => None,
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(source) => match policy {
                    MalformedUserPolicy::Fail => return Err(SessionError::MalformedUser { source }),
                    MalformedUserPolicy::Discard => {
                        log::warn!("session: discarding malformed stored user: {source}");
                        None
                    }
                },
            },
        };

        log::debug!(
            "session: loaded (token present: {}, user present: {})",
            token.as_deref().is_some_and(|t| !t.is_empty()),
            user.is_some()
        );
        Ok(Self { storage, token, user })
    }

    /// True iff a non-empty token is held in memory.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the token. Callers pass the token from a successful login;
    /// emptiness is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the write-through fails.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), SessionError> {
        let token = token.into();
        self.storage_write(TOKEN_KEY, &token, |s| s.token = Some(token.clone()))?;
        log::info!("session: token updated");
        Ok(())
    }

    /// Replace the cached user profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SerializeUser`] or [`SessionError::Storage`].
    pub fn set_user(&mut self, user: UserProfile) -> Result<(), SessionError> {
        let raw = serde_json::to_string(&user).map_err(|source| SessionError::SerializeUser { source })?;
        let id = user.id;
        self.storage_write(USER_KEY, &raw, |s| s.user = Some(user))?;
        log::info!("session: user {id} cached");
        Ok(())
    }

    /// Clear token and user from memory and storage. Safe to repeat.
    ///
    /// # Errors
    ///
    /// Returns the first storage removal failure; memory is cleared and the
    /// second removal is still attempted.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.token = None;
        self.user = None;
        let token_removed = self.storage.remove(TOKEN_KEY);
        let user_removed = self.storage.remove(USER_KEY);
        token_removed?;
        user_removed?;
        log::info!("session: logged out");
        Ok(())
    }

    fn storage_write(
        &mut self,
        key: &str,
        value: &str,
        apply: impl FnOnce(&mut Self),
    ) -> Result<(), SessionError> {
        apply(self);
        self.storage.set(key, value).map_err(|e| {
            log::error!("session: {e}");
            SessionError::from(e)
        })
    }
}
