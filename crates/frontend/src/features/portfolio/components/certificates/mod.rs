pub mod details;
pub mod state;

use self::details::CertificateDetails;
use self::state::create_state;
use contracts::domain::a001_certificate::Certificate;
use contracts::shared::Catalog;
use leptos::prelude::*;

#[component]
fn CertificateCard(certificate: Certificate, on_open: Callback<()>) -> impl IntoView {
    view! {
        <button class="certificate-card" on:click=move |_| on_open.run(())>
            <img class="certificate-card__image" src=certificate.image alt=certificate.title.clone() loading="lazy" />
            <div class="certificate-card__body">
                <h3 class="certificate-card__title">{certificate.title}</h3>
                <p class="certificate-card__subtitle">{certificate.subtitle}</p>
                <span class="certificate-card__year">{certificate.year}</span>
            </div>
        </button>
    }
}

/// Certificates gallery: filter buttons, grid and detail modal
#[component]
pub fn Certificates() -> impl IntoView {
    let catalog = Catalog::global();
    let state = create_state(catalog.certificates.clone());

    let filter_bar = move || {
        catalog
            .filters
            .iter()
            .map(|tag| {
                let value = tag.value.clone();
                let value_for_click = tag.value.clone();
                view! {
                    <button
                        class=move || {
                            if state.with(|s| s.is_active(&value)) {
                                "filter-bar__item filter-bar__item--active"
                            } else {
                                "filter-bar__item"
                            }
                        }
                        on:click=move |_| state.update(|s| s.set_filter(value_for_click.clone()))
                    >
                        {tag.name.clone()}
                    </button>
                }
            })
            .collect_view()
    };

    let has_items = move || state.with(|s| !s.items().is_empty());
    let visible = Memo::new(move |_| state.with(|s| s.visible_items()));

    let open_details = move || {
        state
            .with(|s| s.detail().map(|(cert, detail)| (cert.clone(), detail)))
            .map(|(certificate, detail)| {
                view! {
                    <CertificateDetails
                        certificate=certificate
                        detail=detail
                        on_close=Callback::new(move |_| state.update(|s| s.dismiss()))
                    />
                }
            })
    };

    view! {
        <section id="certificates" class="section certificates">
            <h2 class="section__title">"Certificates"</h2>

            <Show
                when=has_items
                fallback=|| view! { <p class="empty-state">"No certificates to show yet."</p> }
            >
                <div class="filter-bar">{filter_bar()}</div>

                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! { <p class="empty-state">"No certificates in this category."</p> }
                >
                    <div class="certificates__grid">
                        <For
                            each=move || visible.get()
                            key=|cert| cert.title.clone()
                            children=move |cert| {
                                let selected = cert.clone();
                                view! {
                                    <CertificateCard
                                        certificate=cert
                                        on_open=Callback::new(move |_| {
                                            state.update(|s| s.select(selected.clone()))
                                        })
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            {open_details}
        </section>
    }
}
