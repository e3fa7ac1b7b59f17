use contracts::domain::a002_testimonial::aggregate::MAX_RATING;
use contracts::domain::a002_testimonial::Testimonial;
use contracts::shared::Catalog;
use leptos::prelude::*;

/// Filled and empty stars for a rating already clamped to the scale
pub fn star_line(stars: u8) -> String {
    let filled = stars.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let stars = testimonial.stars();

    view! {
        <figure class="testimonial-card">
            <div class="testimonial-card__rating" aria-label=format!("{} out of {}", stars, MAX_RATING)>
                {star_line(stars)}
            </div>
            <blockquote class="testimonial-card__text">{testimonial.testimonial}</blockquote>
            <figcaption>
                <strong>{testimonial.name}</strong>
                <span class="testimonial-card__role">{testimonial.role}</span>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let testimonials = Catalog::global().testimonials.clone();

    view! {
        <section id="testimonials" class="section testimonials">
            <h2 class="section__title">"Testimonials"</h2>
            {if testimonials.is_empty() {
                view! { <p class="empty-state">"No testimonials yet."</p> }.into_any()
            } else {
                view! {
                    <div class="testimonials__grid">
                        {testimonials
                            .into_iter()
                            .map(|t| view! { <TestimonialCard testimonial=t /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_line() {
        assert_eq!(star_line(5), "★★★★★");
        assert_eq!(star_line(3), "★★★☆☆");
        assert_eq!(star_line(0), "☆☆☆☆☆");
    }

    #[test]
    fn test_star_line_caps_at_scale() {
        assert_eq!(star_line(9), "★★★★★");
    }
}
