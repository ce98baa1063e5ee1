//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::boot::{Booted, boot};
use crate::config::AppConfig;
use crate::pages::{
    layout::MainLayout,
    login::LoginPage,
    profile::ProfilePage,
    section::{IndexPage, NotFoundPage, SectionPage},
};
use crate::router::NavigationGuard;
use crate::state::auth::AuthContext;
use crate::state::storage::BrowserStorage;

/// Root application component.
///
/// Restores the session from `localStorage`, provides [`AuthContext`], and
/// mounts the router with the navigation guard in front of every route.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let Booted { client, session } = match boot(&config, BrowserStorage) {
        Ok(booted) => booted,
        Err(e) => {
            log::error!("boot: {e}");
            return view! {
                <div class="boot-error">
                    <h1>"Preservation"</h1>
                    <p>"The saved session could not be restored. Clear site data and sign in again."</p>
                </div>
            }
            .into_any();
        }
    };
    provide_context(AuthContext::new(session, client, config.auth_header_sync));

    view! {
        <Title text="Preservation"/>

        <Router>
            <NavigationGuard/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=MainLayout>
                    <Route path=StaticSegment("") view=IndexPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("equipments") view=SectionPage/>
                    <Route path=StaticSegment("checksheets") view=SectionPage/>
                    <Route path=(StaticSegment("setting"), StaticSegment("activities")) view=SectionPage/>
                    <Route path=(StaticSegment("setting"), StaticSegment("suppliers")) view=SectionPage/>
                    <Route path=(StaticSegment("setting"), StaticSegment("locations")) view=SectionPage/>
                    <Route path=(StaticSegment("setting"), StaticSegment("categories")) view=SectionPage/>
                    <Route path=(StaticSegment("setting"), StaticSegment("sub-categories")) view=SectionPage/>
                    <Route path=(StaticSegment("setting"), StaticSegment("users")) view=SectionPage/>
                    <Route path=(StaticSegment("role-permission"), StaticSegment("roles")) view=SectionPage/>
                    <Route path=(StaticSegment("role-permission"), StaticSegment("permissions")) view=SectionPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
    .into_any()
}
