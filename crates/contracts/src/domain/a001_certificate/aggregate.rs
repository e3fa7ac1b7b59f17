use serde::{Deserialize, Serialize};

use super::details::{describe, CategoryDetail};
use crate::domain::common::Categorized;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сертификат из каталога портфолио
///
/// `title` служит ключом при отрисовке списка; дубликаты не отвергаются,
/// но build script предупреждает о них.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,

    /// Кем выдан (в карточке отображается как "client")
    pub subtitle: String,

    pub image: String,
    pub category: String,

    /// Только для отображения, как дата не разбирается
    pub year: String,
}

impl Certificate {
    /// Описание и темы сертификата по его категории и названию
    pub fn detail(&self) -> CategoryDetail {
        describe(&self.category, &self.title)
    }
}

impl Categorized for Certificate {
    fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_certificate() {
        let json = r#"{
            "title": "CSS (Basic)",
            "subtitle": "HackerRank",
            "image": "/assets/css.png",
            "category": "css",
            "year": "2023"
        }"#;
        let cert: Certificate = serde_json::from_str(json).unwrap();
        assert_eq!(cert.title, "CSS (Basic)");
        assert_eq!(cert.category(), "css");
        assert_eq!(cert.year, "2023");
    }

    #[test]
    fn test_detail_uses_category_and_title() {
        let cert = Certificate {
            title: "JavaScript (Intermediate)".to_string(),
            subtitle: "HackerRank".to_string(),
            image: String::new(),
            category: "javascript".to_string(),
            year: "2024".to_string(),
        };
        assert_eq!(cert.detail(), describe("javascript", "Intermediate"));
    }
}
