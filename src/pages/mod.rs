//! Route components.
//!
//! Pages read and mutate the session only through `AuthContext`.

pub mod layout;
pub mod login;
pub mod profile;
pub mod section;
