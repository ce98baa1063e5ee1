//! Routing: the navigation guard and the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos Router has no pre-transition hook, so the guard runs as an effect
//! keyed on the current pathname. It also reads the session signal, which
//! means signing in on `/login` or signing out anywhere re-runs it.

pub mod guard;
pub mod routes;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthContext;
use self::guard::{GuardDecision, Transition};

/// Check every navigation against the live session and replace the history
/// entry on redirect. Must be called inside `<Router>`.
pub fn install_navigation_guard(auth: AuthContext) {
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move |from: Option<String>| {
        let to = location.pathname.get();
        let transition = Transition { to: &to, from: from.as_deref() };
        let decision = auth.session.with(|session| guard::before_each(transition, session));
        if let GuardDecision::Redirect(target) = decision {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        to
    });
}

/// Renders nothing; installs the guard from within the router tree.
#[component]
pub fn NavigationGuard() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_navigation_guard(auth);
}
