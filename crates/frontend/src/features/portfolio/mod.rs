//! Public portfolio: the single-page home with all its sections

pub mod components;
pub mod pages;
