use crate::routes::routes::AppRoutes;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;
use contracts::shared::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Site-wide profile, links and API location for every view.
    provide_context::<SiteConfig>(SiteConfig::global().clone());

    // Toasts for form side effects (signup success etc.)
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
