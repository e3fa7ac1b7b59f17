use crate::shared::icons::icon;
use crate::shared::site_config::use_site_config;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_site_config();
    let profile = config.profile;
    let mailto = format!("mailto:{}", profile.email);
    let tel = format!("tel:{}", profile.phone.replace(' ', ""));

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Get in touch"</h2>
            <ul class="contact__list">
                <li>{icon("mail")} <a href=mailto>{profile.email}</a></li>
                <li>{icon("phone")} <a href=tel>{profile.phone}</a></li>
                <li>{icon("map-pin")} <span>{profile.location}</span></li>
            </ul>
            <div class="contact__social">
                {config
                    .social
                    .into_iter()
                    .map(|link| view! {
                        <a class="button button--ghost" href=link.url target="_blank" rel="noopener noreferrer">
                            {icon(link.icon.as_deref().unwrap_or_default())}
                            " "
                            {link.label}
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
