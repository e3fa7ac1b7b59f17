pub mod certificates;
pub mod contact;
pub mod hero;
pub mod technologies;
pub mod testimonials;
