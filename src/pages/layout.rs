//! Authenticated shell: header, navigation drawer and page outlet.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use crate::router::routes::{self, Section};
use crate::state::auth::AuthContext;

fn nav_group(label: &'static str, section: Section) -> impl IntoView {
    view! {
        <div class="nav-group">
            <p class="nav-group__label">{label}</p>
            {routes::in_section(section)
                .map(|r| view! { <A href=r.path>{r.title}</A> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn MainLayout() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let location = use_location();
    let title = move || routes::title_for(&location.pathname.get());
    let user_name = move || auth.user().map(|u| u.name).unwrap_or_default();

    // A token restored at boot may come without a cached profile.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        if auth.is_authenticated() && auth.user().is_none() {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_current_user(&auth.client()).await {
                    Ok(user) => {
                        if let Err(e) = auth.store_user(user) {
                            log::warn!("layout: profile not cached: {e}");
                        }
                    }
                    Err(e) => log::warn!("layout: could not load current user: {e}"),
                }
            });
        }
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let client = auth.client();
            leptos::task::spawn_local(async move { crate::net::api::logout(&client).await });
        }
        if let Err(e) = auth.sign_out() {
            log::error!("layout: sign-out did not clear storage: {e}");
        }
    };

    view! {
        <div class="main-layout">
            <header class="main-header">
                <h1 class="main-header__title">{title}</h1>
                <span class="main-header__user">{user_name}</span>
                <button class="main-header__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <nav class="main-drawer">
                {nav_group("Main", Section::Main)}
                {nav_group("Setting", Section::Setting)}
                {nav_group("Role & Permission", Section::RolePermission)}
            </nav>
            <main class="main-content">
                <Outlet/>
            </main>
        </div>
    }
}
