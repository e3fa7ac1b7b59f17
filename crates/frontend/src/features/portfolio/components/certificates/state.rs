use contracts::domain::a001_certificate::Certificate;
use contracts::shared::GalleryState;
use leptos::prelude::*;

pub type CertificatesState = GalleryState<Certificate>;

pub fn create_state(certificates: Vec<Certificate>) -> RwSignal<CertificatesState> {
    RwSignal::new(GalleryState::new(certificates))
}
