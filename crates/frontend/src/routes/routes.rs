use crate::features::portfolio::pages::home::HomePage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::admin::AdminPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::signup::SignupPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminPage />
        </RequireAdmin>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/admin") view=AdminArea />
                    <Route path=path!("/admin/*any") view=AdminArea />
                </Routes>
            </Shell>
        </Router>
    }
}
