//! REST calls for the auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, built from the shared
//! [`ApiClient`] so they carry its default headers.
//! Elsewhere: stubs returning [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`] for the page to show; nothing here
//! touches the session store.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::types::{LoginRequest, LoginResponse, UserProfile};

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";
pub const CURRENT_USER_ENDPOINT: &str = "/api/user";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS).
    #[error("request failed: {0}")]
    Request(String),

    #[error("{}", status_message(*status))]
    Status { status: u16 },

    #[error("response parse failed: {0}")]
    Parse(String),

    /// No browser transport in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

fn status_message(status: u16) -> String {
    match status {
        401 | 422 => "invalid email or password".to_owned(),
        429 => "too many attempts, try again later".to_owned(),
        _ => format!("server responded with status {status}"),
    }
}

/// Exchange credentials for a bearer token via `POST /api/login`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status or a bad body.
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = client
            .request(gloo_net::http::Method::POST, LOGIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the profile for the token currently on the client (`GET /api/user`).
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status or a bad body.
pub async fn fetch_current_user(client: &ApiClient) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = client
            .request(gloo_net::http::Method::GET, CURRENT_USER_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        resp.json::<UserProfile>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
        Err(ApiError::Unavailable)
    }
}

/// Revoke the token server-side via `POST /api/logout`. Best effort: the local
/// session is cleared regardless of the outcome.
pub async fn logout(client: &ApiClient) {
    #[cfg(feature = "csr")]
    {
        match client
            .request(gloo_net::http::Method::POST, LOGOUT_ENDPOINT)
            .send()
            .await
        {
            Ok(resp) if !resp.ok() => log::warn!("api: logout returned {}", resp.status()),
            Ok(_) => {}
            Err(e) => log::warn!("api: logout request failed: {e}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
    }
}
