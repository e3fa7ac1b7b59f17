use crate::shared::icons::icon;
use crate::shared::site_config::use_site_config;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__social">
                {config
                    .social
                    .iter()
                    .map(|link| {
                        let icon_name = link.icon.clone().unwrap_or_default();
                        view! {
                            <a
                                class="footer__social-link"
                                href=link.url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label.clone()
                            >
                                {icon(&icon_name)}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <span class="footer__copyright">{format!("© {}", config.profile.name)}</span>
        </footer>
    }
}
