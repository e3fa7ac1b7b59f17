//! Common traits for all catalog records

/// Запись каталога, которую можно отфильтровать по категории
pub trait Categorized {
    fn category(&self) -> &str;
}
