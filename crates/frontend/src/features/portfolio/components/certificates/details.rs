use crate::shared::modal::Modal;
use contracts::domain::a001_certificate::{CategoryDetail, Certificate};
use leptos::prelude::*;

/// Detail modal for a selected certificate
#[component]
pub fn CertificateDetails(
    certificate: Certificate,
    detail: CategoryDetail,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=certificate.title.clone() on_close=on_close>
            <div class="certificate-details">
                <img class="certificate-details__image" src=certificate.image alt=certificate.title />
                <dl class="certificate-details__meta">
                    <dt>"Issued by"</dt>
                    <dd>{certificate.subtitle}</dd>
                    <dt>"Year"</dt>
                    <dd>{certificate.year}</dd>
                </dl>
                <p class="certificate-details__description">{detail.description}</p>
                <h3>"Topics covered"</h3>
                <ul class="certificate-details__topics">
                    {detail
                        .topics
                        .iter()
                        .map(|topic| view! { <li class="badge badge--primary">{*topic}</li> })
                        .collect_view()}
                </ul>
            </div>
        </Modal>
    }
}
