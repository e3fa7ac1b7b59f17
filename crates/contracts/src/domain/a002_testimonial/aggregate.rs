use serde::{Deserialize, Serialize};

/// Upper bound of the star scale shown on testimonial cards.
pub const MAX_RATING: u8 = 5;

/// Отзыв о работе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub testimonial: String,

    /// Наблюдаемый диапазон 1–5, при загрузке не проверяется
    pub rating: i32,
}

impl Testimonial {
    /// Rating clamped into `0..=MAX_RATING` for rendering stars.
    pub fn stars(&self) -> u8 {
        self.rating.clamp(0, MAX_RATING as i32) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rating(rating: i32) -> Testimonial {
        Testimonial {
            name: "Test".to_string(),
            role: "Role".to_string(),
            testimonial: "Text".to_string(),
            rating,
        }
    }

    #[test]
    fn test_stars_in_range() {
        assert_eq!(with_rating(4).stars(), 4);
        assert_eq!(with_rating(5).stars(), 5);
    }

    #[test]
    fn test_stars_clamped() {
        assert_eq!(with_rating(9).stars(), MAX_RATING);
        assert_eq!(with_rating(-3).stars(), 0);
    }
}
