//! Catalog store: embedded certificates, testimonials and filter tags
//!
//! Данные встраиваются в бинарник через `include_str!` и проверяются
//! build script'ом, поэтому ошибки разбора здесь возможны только для
//! данных, переданных снаружи (`parse_*`).

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::a001_certificate::Certificate;
use crate::domain::a002_testimonial::Testimonial;
use crate::domain::a003_filter_tag::FilterTag;

const CERTIFICATES_JSON: &str = include_str!("../../data/certificates.json");
const TESTIMONIALS_JSON: &str = include_str!("../../data/testimonials.json");
const FILTERS_JSON: &str = include_str!("../../data/filters.json");

/// Catalog data is absent or cannot be parsed.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("catalog data '{0}' is missing")]
    Missing(&'static str),

    #[error("catalog data '{name}' is malformed: {source}")]
    Malformed {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Разобрать коллекцию записей каталога из JSON
pub fn parse_collection<T: DeserializeOwned>(
    name: &'static str,
    text: &str,
) -> Result<Vec<T>, DataLoadError> {
    if text.trim().is_empty() {
        return Err(DataLoadError::Missing(name));
    }
    serde_json::from_str(text).map_err(|source| DataLoadError::Malformed { name, source })
}

pub fn parse_certificates(text: &str) -> Result<Vec<Certificate>, DataLoadError> {
    parse_collection("certificates", text)
}

pub fn parse_testimonials(text: &str) -> Result<Vec<Testimonial>, DataLoadError> {
    parse_collection("testimonials", text)
}

pub fn parse_filters(text: &str) -> Result<Vec<FilterTag>, DataLoadError> {
    parse_collection("filters", text)
}

pub fn load_certificates() -> Result<Vec<Certificate>, DataLoadError> {
    parse_certificates(CERTIFICATES_JSON)
}

pub fn load_testimonials() -> Result<Vec<Testimonial>, DataLoadError> {
    parse_testimonials(TESTIMONIALS_JSON)
}

pub fn load_filters() -> Result<Vec<FilterTag>, DataLoadError> {
    parse_filters(FILTERS_JSON)
}

/// Весь каталог портфолио, только для чтения
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub certificates: Vec<Certificate>,
    pub testimonials: Vec<Testimonial>,
    pub filters: Vec<FilterTag>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::load_or_empty);

impl Catalog {
    pub fn load() -> Result<Self, DataLoadError> {
        Ok(Self {
            certificates: load_certificates()?,
            testimonials: load_testimonials()?,
            filters: load_filters()?,
        })
    }

    /// Each collection degrades to empty on its own, so one bad file
    /// does not blank the whole page.
    pub fn load_or_empty() -> Self {
        Self {
            certificates: or_empty(load_certificates()),
            testimonials: or_empty(load_testimonials()),
            filters: or_empty(load_filters()),
        }
    }

    /// Catalog loaded once per process.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }
}

fn or_empty<T>(result: Result<Vec<T>, DataLoadError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            log::error!("{}; rendering empty state", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_filter_tag::FilterValue;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_data_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.certificates.is_empty());
        assert!(!catalog.testimonials.is_empty());
        assert!(!catalog.filters.is_empty());
    }

    #[test]
    fn test_embedded_filters_start_with_all() {
        let filters = load_filters().unwrap();
        assert_eq!(filters[0].value, FilterValue::All);
        let all_count = filters.iter().filter(|f| f.value == FilterValue::All).count();
        assert_eq!(all_count, 1);
    }

    #[test]
    fn test_embedded_titles_unique() {
        let certificates = load_certificates().unwrap();
        let titles: HashSet<&str> = certificates.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles.len(), certificates.len());
    }

    #[test]
    fn test_empty_source_is_missing() {
        let result = parse_certificates("   ");
        assert!(matches!(result, Err(DataLoadError::Missing("certificates"))));
    }

    #[test]
    fn test_malformed_source() {
        let result = parse_testimonials(r#"[{"name": "A"}]"#);
        assert!(matches!(
            result,
            Err(DataLoadError::Malformed { name: "testimonials", .. })
        ));

        let result = parse_filters("{not json");
        assert!(matches!(result, Err(DataLoadError::Malformed { .. })));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_certificates("[]").unwrap().is_empty());
    }

    #[test]
    fn test_or_empty_recovers() {
        let items: Vec<Certificate> = or_empty(parse_certificates(""));
        assert!(items.is_empty());
    }

    #[test]
    fn test_global_is_shared() {
        let a = Catalog::global();
        let b = Catalog::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.certificates.len(), load_certificates().unwrap().len());
    }
}
