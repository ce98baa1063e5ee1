//! Read-only view of the cached user profile.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::auth::AuthContext;

/// Label/value pairs shown on the profile card. Missing values render as `-`.
fn profile_rows(user: &UserProfile) -> Vec<(&'static str, String)> {
    fn or_dash(value: Option<&str>) -> String {
        value.unwrap_or("-").to_owned()
    }

    let status = match user.is_active {
        Some(true) => "Active",
        Some(false) => "Inactive",
        None => "-",
    };
    vec![
        ("Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Phone", or_dash(user.phone.as_deref())),
        ("Date of birth", or_dash(user.date_of_birth.as_deref())),
        ("Job start", or_dash(user.job_start_date.as_deref())),
        ("Job end", or_dash(user.job_end_date.as_deref())),
        ("Type", user.user_type.clone()),
        ("Status", status.to_owned()),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <section class="profile-page">
            {move || match auth.user() {
                Some(user) => {
                    let avatar = user.avatar.clone();
                    view! {
                        <div class="profile-card">
                            {avatar.map(|src| view! { <img class="profile-card__avatar" src=src/> })}
                            <dl class="profile-card__fields">
                                {profile_rows(&user)
                                    .into_iter()
                                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                    .collect_view()}
                            </dl>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <p class="profile-page__loading">"Loading profile..."</p> }.into_any(),
            }}
        </section>
    }
}
