use crate::features::portfolio::components::certificates::Certificates;
use crate::features::portfolio::components::contact::Contact;
use crate::features::portfolio::components::hero::Hero;
use crate::features::portfolio::components::technologies::Technologies;
use crate::features::portfolio::components::testimonials::Testimonials;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Technologies />
        <Certificates />
        <Testimonials />
        <Contact />
    }
}
