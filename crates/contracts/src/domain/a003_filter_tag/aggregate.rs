use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved filter value meaning "match all". Never a real category.
pub const ALL_SENTINEL: &str = "*";

/// Значение фильтра галереи
///
/// В JSON хранится строкой; `"*"` всегда разбирается как [`FilterValue::All`],
/// поэтому категория не может совпасть с зарезервированным значением.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    #[default]
    All,
    Category(String),
}

impl FilterValue {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Category(value) => value == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => ALL_SENTINEL,
            FilterValue::Category(value) => value,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        if value == ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Category(value.to_string())
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        if value == ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Category(value)
        }
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::All => ALL_SENTINEL.to_string(),
            FilterValue::Category(value) => value,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Кнопка фильтра галереи сертификатов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTag {
    /// Подпись кнопки
    pub name: String,
    pub value: FilterValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_parses_as_all() {
        let tag: FilterTag = serde_json::from_str(r#"{"name":"All","value":"*"}"#).unwrap();
        assert_eq!(tag.value, FilterValue::All);
    }

    #[test]
    fn test_category_value_parses() {
        let tag: FilterTag =
            serde_json::from_str(r#"{"name":"React","value":"react"}"#).unwrap();
        assert_eq!(tag.value, FilterValue::Category("react".to_string()));
    }

    #[test]
    fn test_serializes_back_to_plain_string() {
        let json = serde_json::to_string(&FilterValue::All).unwrap();
        assert_eq!(json, r#""*""#);
        let json = serde_json::to_string(&FilterValue::from("css")).unwrap();
        assert_eq!(json, r#""css""#);
    }

    #[test]
    fn test_matches() {
        assert!(FilterValue::All.matches("anything"));
        assert!(FilterValue::from("sql").matches("sql"));
        assert!(!FilterValue::from("sql").matches("SQL"));
        assert!(!FilterValue::from("sql").matches("python"));
    }
}
