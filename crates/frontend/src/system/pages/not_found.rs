use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-message">
            <h1>"Page not found"</h1>
            <A href="/">"Go to the home page"</A>
        </div>
    }
}
