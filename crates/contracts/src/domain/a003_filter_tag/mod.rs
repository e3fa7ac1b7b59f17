pub mod aggregate;

pub use aggregate::{FilterTag, FilterValue, ALL_SENTINEL};
