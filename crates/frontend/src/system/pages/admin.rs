use contracts::shared::Catalog;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::system::auth::context::use_auth;

/// Admin landing: who is signed in and what the catalog holds
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let catalog = Catalog::global();

    let display_name = move || {
        auth.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.display_name())
                .unwrap_or_default()
        })
    };

    let rows = [
        ("Certificates", catalog.certificates.len()),
        ("Testimonials", catalog.testimonials.len()),
        ("Filters", catalog.filters.len()),
    ];

    view! {
        <div class="admin-page">
            <h1>"Admin"</h1>
            <p class="admin-page__user">"Signed in as " <strong>{display_name}</strong></p>
            <p class="admin-page__path">"Current page: " <code>{move || location.pathname.get()}</code></p>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Collection"</th>
                        <th>"Records"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(name, count)| view! {
                            <tr>
                                <td>{name}</td>
                                <td>{count}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>

            <A href="/">"Back to site"</A>
        </div>
    }
}
