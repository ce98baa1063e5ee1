//! Wire DTOs shared with the preservation API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON (snake_case) so the same struct is used
//! for HTTP responses and for the `user` entry in durable storage.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as returned by the API and cached locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Numeric user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub job_start_date: Option<String>,
    pub job_end_date: Option<String>,
    /// Account type label (e.g. `"admin"`, `"staff"`).
    pub user_type: String,
    pub is_active: Option<bool>,
    /// Avatar image URL or path, if uploaded.
    pub avatar: Option<String>,
    /// Creation timestamp as sent by the server.
    pub created_at: String,
    /// Last-update timestamp as sent by the server.
    pub updated_at: String,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload: the bearer token and the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}
