use crate::shared::site_config::use_site_config;
use leptos::prelude::*;

#[component]
pub fn Technologies() -> impl IntoView {
    let skills = use_site_config().skills;

    view! {
        <section id="skills" class="section technologies">
            <h2 class="section__title">"Technologies"</h2>
            <div class="technologies__groups">
                {skills
                    .into_iter()
                    .map(|group| view! {
                        <div class="technologies__group">
                            <h3>{group.group}</h3>
                            <ul class="technologies__list">
                                {group
                                    .items
                                    .into_iter()
                                    .map(|item| view! { <li class="badge badge--neutral">{item}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
