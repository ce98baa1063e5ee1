//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `storage` abstracts the durable key-value medium, `session` owns the
//! authentication state on top of it, and `auth` holds the sign-in/sign-out
//! flows plus the reactive context handed to components.

pub mod auth;
pub mod session;
pub mod storage;
