use contracts::system::auth::SITE_ROOT;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::context::use_auth;

/// Query parameter carrying the page that triggered the login prompt
pub const REDIRECT_PARAM: &str = "redirect";

/// Login page URL that remembers where the user was heading
pub fn login_path_for(requested: &str) -> String {
    format!(
        "/login?{}={}",
        REDIRECT_PARAM,
        urlencoding::encode(requested)
    )
}

/// Component that requires admin privileges
///
/// Anonymous visitors are sent to the login page with the current path
/// recorded; signed-in non-admins are sent to the site root.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let (authenticated, admin) = auth.with(|s| (s.is_authenticated(), s.is_admin()));
        if admin {
            return;
        }
        if authenticated {
            navigate(SITE_ROOT, Default::default());
        } else {
            let requested = location.pathname.get_untracked();
            navigate(&login_path_for(&requested), Default::default());
        }
    });

    view! {
        <Show
            when=move || auth.with(|s| s.is_admin())
            fallback=|| view! { <div class="page-message">"Redirecting..."</div> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_path_for() {
        assert_eq!(login_path_for("/admin"), "/login?redirect=%2Fadmin");
        assert_eq!(
            login_path_for("/admin/users"),
            "/login?redirect=%2Fadmin%2Fusers"
        );
    }
}
