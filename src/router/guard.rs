//! Pre-render navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route transition is checked against the live session. Only the
//! literal `/login` path is special: it is reachable only while signed out.
//! Every other path, including unknown ones, requires a session.
//!
//! Redirect targets are fixed points: `/` proceeds whenever a session exists
//! and `/login` proceeds whenever it does not, so re-checking a redirect
//! always settles after one hop.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionStore;
use crate::state::storage::KeyValueStore;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// A requested route change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<'a> {
    pub to: &'a str,
    /// `None` on the initial page load.
    pub from: Option<&'a str>,
}

/// Outcome of a guard check. Exactly one per transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decide a transition to `to` given the authentication state.
pub fn decide(to: &str, authenticated: bool) -> GuardDecision {
    match (to == LOGIN_PATH, authenticated) {
        (true, true) => GuardDecision::Redirect(HOME_PATH),
        (false, false) => GuardDecision::Redirect(LOGIN_PATH),
        (true, false) | (false, true) => GuardDecision::Proceed,
    }
}

/// Check `transition` against the store's current session.
pub fn before_each<S: KeyValueStore>(transition: Transition<'_>, session: &SessionStore<S>) -> GuardDecision {
    let decision = decide(transition.to, session.is_authenticated());
    log::debug!(
        "guard: {} -> {}: {decision:?}",
        transition.from.unwrap_or("(initial)"),
        transition.to
    );
    decision
}
