use crate::shared::icons::icon;
use crate::shared::site_config::use_site_config;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = use_site_config().profile;

    view! {
        <section id="about" class="section hero">
            {profile.avatar.map(|src| view! {
                <img class="hero__avatar" src=src alt="Profile photo" />
            })}
            <div class="hero__text">
                <h1 class="hero__name">{profile.name}</h1>
                <p class="hero__headline">{profile.headline}</p>
                <p class="hero__summary">{profile.summary}</p>
                {profile.resume_url.map(|href| view! {
                    <a class="button button--primary" href=href download="">
                        {icon("download")}
                        " Download resume"
                    </a>
                })}
            </div>
        </section>
    }
}
