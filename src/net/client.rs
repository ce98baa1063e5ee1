//! Shared HTTP client settings for the preservation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` is created at boot and provided through context. It carries
//! the base URL, the credentials mode and a map of default headers that every
//! request built from it receives, so call sites never attach the bearer
//! token themselves.
//!
//! Client-side (csr): requests are `gloo-net` builders.
//! Elsewhere only the header bookkeeping exists, which keeps it testable.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::collections::BTreeMap;

use crate::config::AppConfig;
use crate::state::storage::{KeyValueStore, StorageError, TOKEN_KEY};

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    with_credentials: bool,
    default_headers: BTreeMap<String, String>,
}

impl ApiClient {
    /// Client with JSON content negotiation defaults and no credentials header.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert("Content-Type".to_owned(), "application/json".to_owned());
        default_headers.insert("Accept".to_owned(), "application/json".to_owned());
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            with_credentials: config.with_credentials,
            default_headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    pub fn default_header(&self, name: &str) -> Option<&str> {
        self.default_headers.get(name).map(String::as_str)
    }

    pub fn set_default_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.default_headers.insert(name.into(), value.into());
    }

    pub fn remove_default_header(&mut self, name: &str) {
        self.default_headers.remove(name);
    }

    /// Install `Authorization: Bearer <token>` as a default header.
    pub fn set_bearer_token(&mut self, token: &str) {
        self.set_default_header(AUTHORIZATION, bearer_value(token));
    }

    pub fn clear_bearer_token(&mut self) {
        self.remove_default_header(AUTHORIZATION);
    }

    /// Absolute URL for an API path such as `/api/login`.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Start a request with the default headers and credentials mode applied.
    #[cfg(feature = "csr")]
    pub fn request(&self, method: gloo_net::http::Method, path: &str) -> gloo_net::http::RequestBuilder {
        let mut builder = gloo_net::http::RequestBuilder::new(&self.url(path)).method(method);
        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }
        let credentials = if self.with_credentials {
            web_sys::RequestCredentials::Include
        } else {
            web_sys::RequestCredentials::SameOrigin
        };
        builder.credentials(credentials)
    }
}

/// Build the shared client and, if a token was persisted by an earlier
/// session, install it as the default bearer header.
///
/// Runs once at startup. Later `set_token` calls do not come back here.
///
/// # Errors
///
/// Returns [`StorageError`] if the token entry cannot be read.
pub fn configure_api_client<S: KeyValueStore>(config: &AppConfig, storage: &S) -> Result<ApiClient, StorageError> {
    let mut client = ApiClient::new(config);
    match storage.get(TOKEN_KEY)? {
        Some(token) if !token.is_empty() => {
            client.set_bearer_token(&token);
            log::info!("api: bearer token restored from storage");
        }
        _ => log::debug!("api: no stored token, client starts anonymous"),
    }
    Ok(client)
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
