use crate::shared::site_config::use_site_config;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

/// In-page sections linked from the header
const SECTIONS: &[(&str, &str)] = &[
    ("/#about", "About"),
    ("/#skills", "Skills"),
    ("/#certificates", "Certificates"),
    ("/#testimonials", "Testimonials"),
    ("/#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let config = use_site_config();
    let auth = use_auth();
    // The admin guard moves the visitor out of protected pages on its own
    let on_logout = move |_| do_logout(auth);

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">{config.profile.name.clone()}</A>
                <nav class="header__nav">
                    {SECTIONS
                        .iter()
                        .map(|(href, label)| view! { <a class="header__link" href=*href>{*label}</a> })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <Show when=move || auth.with(|s| s.is_admin())>
                    <A href="/admin" attr:class="button button--ghost">"Admin"</A>
                </Show>
                <Show
                    when=move || auth.with(|s| s.is_authenticated())
                    fallback=|| view! { <A href="/login" attr:class="button button--primary">"Sign in"</A> }
                >
                    <button class="button button--ghost" on:click=on_logout>"Sign out"</button>
                </Show>
            </div>
        </header>
    }
}
