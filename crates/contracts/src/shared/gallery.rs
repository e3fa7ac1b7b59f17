//! Filter/select state for a category-filtered gallery with a detail modal

use std::sync::Arc;

use crate::domain::a001_certificate::{CategoryDetail, Certificate};
use crate::domain::a003_filter_tag::FilterValue;
use crate::domain::common::Categorized;

/// Состояние галереи: активный фильтр и выбранный элемент
///
/// Каталог разделяется через `Arc`, состояние можно клонировать дёшево.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState<T> {
    items: Arc<[T]>,
    active_filter: FilterValue,
    selected: Option<T>,
    is_detail_open: bool,
}

impl<T: Categorized + Clone> GalleryState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::from_shared(items.into())
    }

    pub fn from_shared(items: Arc<[T]>) -> Self {
        Self {
            items,
            active_filter: FilterValue::All,
            selected: None,
            is_detail_open: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn active_filter(&self) -> &FilterValue {
        &self.active_filter
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.is_detail_open
    }

    pub fn is_active(&self, value: &FilterValue) -> bool {
        &self.active_filter == value
    }

    /// Replaces the filter unconditionally. A value matching no category
    /// simply yields an empty subset.
    pub fn set_filter(&mut self, value: impl Into<FilterValue>) {
        self.active_filter = value.into();
    }

    /// Items matching the active filter, in catalog order.
    pub fn visible_items(&self) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| self.active_filter.matches(item.category()))
            .cloned()
            .collect()
    }

    pub fn select(&mut self, item: T) {
        self.selected = Some(item);
        self.is_detail_open = true;
    }

    /// Closes the modal first, then drops the selection.
    pub fn dismiss(&mut self) {
        self.is_detail_open = false;
        self.selected = None;
    }
}

impl GalleryState<Certificate> {
    /// Selected certificate with its derived description, while the modal is open.
    pub fn detail(&self) -> Option<(&Certificate, CategoryDetail)> {
        if !self.is_detail_open {
            return None;
        }
        self.selected.as_ref().map(|cert| (cert, cert.detail()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(title: &str, category: &str) -> Certificate {
        Certificate {
            title: title.to_string(),
            subtitle: "HackerRank".to_string(),
            image: format!("/assets/{}.png", title),
            category: category.to_string(),
            year: "2024".to_string(),
        }
    }

    fn sample() -> Vec<Certificate> {
        vec![
            cert("JS Basic", "javascript"),
            cert("CSS Basic", "css"),
            cert("JS Intermediate", "javascript"),
            cert("SQL Basic", "sql"),
            cert("CSS Advanced", "css"),
        ]
    }

    fn titles(items: &[Certificate]) -> Vec<&str> {
        items.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = GalleryState::new(sample());
        assert_eq!(state.active_filter(), &FilterValue::All);
        assert!(state.selected().is_none());
        assert!(!state.is_detail_open());
        assert!(state.detail().is_none());
    }

    #[test]
    fn test_all_returns_catalog_in_order() {
        let mut state = GalleryState::new(sample());
        assert_eq!(state.visible_items(), sample());

        state.set_filter("css");
        state.set_filter("*");
        assert_eq!(state.visible_items(), sample());
    }

    #[test]
    fn test_category_filter_is_stable() {
        let mut state = GalleryState::new(sample());
        state.set_filter("javascript");
        assert_eq!(
            titles(&state.visible_items()),
            vec!["JS Basic", "JS Intermediate"]
        );

        state.set_filter(FilterValue::from("css"));
        assert_eq!(
            titles(&state.visible_items()),
            vec!["CSS Basic", "CSS Advanced"]
        );
    }

    #[test]
    fn test_unknown_filter_yields_empty() {
        let mut state = GalleryState::new(sample());
        state.set_filter("rust");
        assert!(state.visible_items().is_empty());
        assert!(state.is_active(&FilterValue::from("rust")));
    }

    #[test]
    fn test_visible_items_is_repeatable() {
        let mut state = GalleryState::new(sample());
        state.set_filter("sql");
        assert_eq!(state.visible_items(), state.visible_items());
    }

    #[test]
    fn test_empty_catalog() {
        let state: GalleryState<Certificate> = GalleryState::new(Vec::new());
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn test_select_opens_detail() {
        let mut state = GalleryState::new(sample());
        let item = sample()[2].clone();
        state.select(item.clone());

        assert!(state.is_detail_open());
        assert_eq!(state.selected(), Some(&item));

        let (selected, detail) = state.detail().unwrap();
        assert_eq!(selected.title, "JS Intermediate");
        assert_eq!(detail.topics[0], "Design Patterns");
    }

    #[test]
    fn test_dismiss_clears_selection() {
        let mut state = GalleryState::new(sample());
        state.select(sample()[0].clone());
        state.select(sample()[1].clone());
        state.dismiss();
        assert!(state.selected().is_none());
        assert!(!state.is_detail_open());

        // dismiss without a selection is harmless
        state.dismiss();
        assert!(state.selected().is_none());
        assert!(!state.is_detail_open());
    }

    #[test]
    fn test_filter_change_keeps_selection() {
        let mut state = GalleryState::new(sample());
        state.select(sample()[3].clone());
        state.set_filter("css");
        assert!(state.is_detail_open());
        assert_eq!(state.selected().map(|c| c.title.as_str()), Some("SQL Basic"));
    }
}
