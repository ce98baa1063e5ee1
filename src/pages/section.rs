//! Dashboard, list-section placeholders and the not-found page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::router::guard::HOME_PATH;
use crate::router::routes;
use crate::state::auth::AuthContext;

#[component]
pub fn IndexPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let greeting = move || match auth.user() {
        Some(user) => format!("Welcome back, {}.", user.name),
        None => "Welcome back.".to_owned(),
    };

    view! {
        <section class="index-page">
            <h2>{greeting}</h2>
            <p>"Choose a section from the menu to get started."</p>
        </section>
    }
}

/// Generic page for the equipment, checksheet and setting sections; the title
/// comes from the route table.
#[component]
pub fn SectionPage() -> impl IntoView {
    let location = use_location();
    let title = move || routes::title_for(&location.pathname.get());

    view! {
        <section class="section-page">
            <h2>{title}</h2>
            <p class="section-page__empty">"No records to show."</p>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"404"</h1>
            <p>"Oops. Nothing here..."</p>
            <A href=HOME_PATH>"Go Home"</A>
        </section>
    }
}
