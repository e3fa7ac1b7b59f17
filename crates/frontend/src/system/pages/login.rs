use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::shared::site_config::use_site_config;
use crate::system::auth::guard::REDIRECT_PARAM;
use crate::system::auth::{api, context::use_auth, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let auth = use_auth();
    let config = use_site_config();
    let query = use_query_map();
    let navigate = use_navigate();

    let site_name = config.profile.name.clone();
    let admin_landing = config.auth.admin_landing.clone();

    let is_loading = move || auth.with(|s| s.phase.is_loading());
    let error_message = move || auth.with(|s| s.phase.error_message().map(str::to_string));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // One request at a time; a second submit while loading is ignored
        let mut started = false;
        auth.update(|s| started = s.phase.submit().is_ok());
        if !started {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let requested = query.with_untracked(|q| q.get(REDIRECT_PARAM));
        let admin_landing = admin_landing.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    let token = response.token.clone();
                    let user = response.user.clone();
                    let mut accepted = false;
                    auth.update(|s| accepted = s.accept(response));
                    if !accepted {
                        return;
                    }
                    storage::save_session(token.as_deref(), &user);

                    let target = auth.with_untracked(|s| {
                        s.phase.redirect_target(requested.as_deref(), &admin_landing)
                    });
                    if let Some(target) = target {
                        log::info!("Signed in as '{}', redirecting to {}", user.role, target);
                        navigate(&target, Default::default());
                    }
                }
                Err(e) => {
                    // Entered email and password stay in place for another try
                    auth.update(|s| {
                        s.phase.fail(e.to_string());
                    });
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{site_name}</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message().is_some()>
                    <div class="error-message">
                        {move || error_message().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=is_loading
                    >
                        {move || if is_loading() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"No account yet? " <A href="/signup">"Create one"</A></p>
                </div>
            </div>
        </div>
    }
}
