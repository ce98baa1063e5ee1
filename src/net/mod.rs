//! Networking modules for the preservation REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` holds the shared base URL and default headers, `api` performs the
//! auth calls, and `types` defines the wire schema.

pub mod api;
pub mod client;
pub mod types;
