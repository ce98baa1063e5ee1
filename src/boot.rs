//! Startup sequence.
//!
//! ARCHITECTURE
//! ============
//! config -> API client (one-shot token read) -> session store load. The
//! router and guard are mounted afterwards by `App` using the result.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use crate::config::AppConfig;
use crate::net::client::{ApiClient, configure_api_client};
use crate::state::session::{SessionError, SessionStore};
use crate::state::storage::KeyValueStore;

#[derive(Debug)]
pub struct Booted<S> {
    pub client: ApiClient,
    pub session: SessionStore<S>,
}

/// Run the startup reads against `storage`.
///
/// # Errors
///
/// Fails if storage cannot be read, or if the stored user is malformed and
/// the config asks for a hard failure.
pub fn boot<S: KeyValueStore>(config: &AppConfig, storage: S) -> Result<Booted<S>, SessionError> {
    let client = configure_api_client(config, &storage)?;
    let session = SessionStore::load(storage, config.malformed_user)?;
    log::info!(
        "boot: api {} (authenticated: {})",
        client.base_url(),
        session.is_authenticated()
    );
    Ok(Booted { client, session })
}
