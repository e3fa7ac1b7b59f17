pub mod a001_certificate;
pub mod a002_testimonial;
pub mod a003_filter_tag;
pub mod common;
