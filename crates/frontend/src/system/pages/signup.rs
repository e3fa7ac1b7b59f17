use contracts::system::auth::{SignupFlow, SignupForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::toast::use_toasts;
use crate::system::auth::api;

/// Text input bound to a string signal
#[component]
fn SignupInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                required=required
                disabled=move || disabled.get()
            />
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let profile_picture = RwSignal::new(String::new());

    let flow = RwSignal::new(SignupFlow::default());
    let toasts = use_toasts();
    let navigate = use_navigate();

    let is_loading = Signal::derive(move || flow.with(|f| f.is_loading()));
    let error_message = move || flow.with(|f| f.error().map(str::to_string));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            phone: phone.get_untracked(),
            profile_picture: profile_picture.get_untracked(),
        };

        // Blank required fields never reach the network
        let mut begun = None;
        flow.update(|f| begun = Some(f.begin(&form)));
        let Some(Ok(request)) = begun else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::signup(&request).await;
            let mut sink = toasts;
            // The page may be gone already; then the result is dropped
            let done = flow
                .try_update(|f| f.finish(result, &mut sink))
                .unwrap_or(false);
            if done {
                log::info!("Signup succeeded for {}", request.email);
                navigate("/login", Default::default());
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box login-box--wide">
                <h2>"Create an account"</h2>

                <Show when=move || error_message().is_some()>
                    <div class="error-message">
                        {move || error_message().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <div class="form-row">
                        <SignupInput id="first_name" label="First name" input_type="text" value=first_name required=true disabled=is_loading />
                        <SignupInput id="last_name" label="Last name" input_type="text" value=last_name required=true disabled=is_loading />
                    </div>
                    <SignupInput id="email" label="Email" input_type="email" value=email required=true disabled=is_loading />
                    <SignupInput id="password" label="Password" input_type="password" value=password required=true disabled=is_loading />
                    <SignupInput id="phone" label="Phone" input_type="tel" value=phone disabled=is_loading />
                    <SignupInput id="profile_picture" label="Profile picture URL" input_type="url" value=profile_picture disabled=is_loading />

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Already registered? " <A href="/login">"Sign in"</A></p>
                </div>
            </div>
        </div>
    }
}
