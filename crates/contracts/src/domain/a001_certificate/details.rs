//! Category-derived content for the certificate detail modal
//!
//! Каждая известная категория сертификата отображается на пару
//! "описание + список тем". Для `javascript` и `problem-solving` есть два
//! варианта, выбираемых по уровню сертификата (см. [`CertificateLevel`]).

/// Описание и темы, показываемые в модальном окне сертификата
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDetail {
    pub description: &'static str,
    pub topics: &'static [&'static str],
}

/// Fallback for categories without a table entry.
pub const DEFAULT_DETAIL: CategoryDetail = CategoryDetail {
    description: "Professional certification demonstrating expertise in the field.",
    topics: &["Professional Skills", "Technical Knowledge", "Best Practices"],
};

const JAVASCRIPT_BASIC: CategoryDetail = CategoryDetail {
    description: "Certification covering the fundamentals of building client-side applications with JavaScript and framework tooling.",
    topics: &[
        "Routing",
        "NgModules",
        "Observables",
        "Dependency Injection",
        "APIs",
    ],
};

const JAVASCRIPT_INTERMEDIATE: CategoryDetail = CategoryDetail {
    description: "Advanced certification validating a deep understanding of how JavaScript runs and how to structure larger programs.",
    topics: &[
        "Design Patterns",
        "Memory Management",
        "Concurrency Model",
        "Event Loops",
    ],
};

const PROBLEM_SOLVING_BASIC: CategoryDetail = CategoryDetail {
    description: "Certification demonstrating the ability to solve algorithmic problems with fundamental data structures.",
    topics: &["Arrays", "Strings", "Sorting", "Searching"],
};

const PROBLEM_SOLVING_INTERMEDIATE: CategoryDetail = CategoryDetail {
    description: "Certification demonstrating efficient solutions to complex algorithmic problems.",
    topics: &[
        "Dynamic Programming",
        "Graph Algorithms",
        "Greedy Algorithms",
        "Complexity Analysis",
    ],
};

const REACT: CategoryDetail = CategoryDetail {
    description: "Certification covering component-based user interfaces built with React.",
    topics: &["Components", "Hooks", "State Management", "JSX"],
};

const CSS: CategoryDetail = CategoryDetail {
    description: "Certification validating layout and styling skills for responsive web pages.",
    topics: &["Selectors", "Flexbox", "Grid", "Responsive Design"],
};

const SQL: CategoryDetail = CategoryDetail {
    description: "Certification demonstrating the ability to query and aggregate relational data.",
    topics: &["Queries", "Joins", "Aggregations", "Subqueries"],
};

const PYTHON: CategoryDetail = CategoryDetail {
    description: "Certification covering core Python language features and the standard library.",
    topics: &["Data Types", "Functions", "Collections", "Exception Handling"],
};

const JAVA: CategoryDetail = CategoryDetail {
    description: "Certification covering object-oriented programming in Java.",
    topics: &["OOP", "Collections", "Exception Handling", "Generics"],
};

const REST_API: CategoryDetail = CategoryDetail {
    description: "Certification validating the design and consumption of RESTful web services.",
    topics: &["HTTP Methods", "Status Codes", "Pagination", "Filtering"],
};

/// Title marker selecting the intermediate variant. Case-sensitive.
const INTERMEDIATE_MARKER: &str = "Intermediate";

/// Уровень сертификата, определяется по названию
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateLevel {
    Basic,
    Intermediate,
}

impl CertificateLevel {
    /// Intermediate when the title contains the literal marker; no trimming or case folding.
    pub fn from_title(title: &str) -> Self {
        if title.contains(INTERMEDIATE_MARKER) {
            CertificateLevel::Intermediate
        } else {
            CertificateLevel::Basic
        }
    }
}

/// Известные категории сертификатов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateCategory {
    Javascript,
    ProblemSolving,
    React,
    Css,
    Sql,
    Python,
    Java,
    RestApi,
}

impl CertificateCategory {
    /// Получить код категории, как он записан в каталоге
    pub fn code(&self) -> &'static str {
        match self {
            CertificateCategory::Javascript => "javascript",
            CertificateCategory::ProblemSolving => "problem-solving",
            CertificateCategory::React => "react",
            CertificateCategory::Css => "css",
            CertificateCategory::Sql => "sql",
            CertificateCategory::Python => "python",
            CertificateCategory::Java => "java",
            CertificateCategory::RestApi => "rest-api",
        }
    }

    /// Парсинг из строки (точное совпадение)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "javascript" => Some(CertificateCategory::Javascript),
            "problem-solving" => Some(CertificateCategory::ProblemSolving),
            "react" => Some(CertificateCategory::React),
            "css" => Some(CertificateCategory::Css),
            "sql" => Some(CertificateCategory::Sql),
            "python" => Some(CertificateCategory::Python),
            "java" => Some(CertificateCategory::Java),
            "rest-api" => Some(CertificateCategory::RestApi),
            _ => None,
        }
    }

    /// Whether the detail depends on the certificate level.
    pub fn has_levels(&self) -> bool {
        matches!(
            self,
            CertificateCategory::Javascript | CertificateCategory::ProblemSolving
        )
    }

    pub fn detail(&self, level: CertificateLevel) -> CategoryDetail {
        match (self, level) {
            (CertificateCategory::Javascript, CertificateLevel::Basic) => JAVASCRIPT_BASIC,
            (CertificateCategory::Javascript, CertificateLevel::Intermediate) => {
                JAVASCRIPT_INTERMEDIATE
            }
            (CertificateCategory::ProblemSolving, CertificateLevel::Basic) => {
                PROBLEM_SOLVING_BASIC
            }
            (CertificateCategory::ProblemSolving, CertificateLevel::Intermediate) => {
                PROBLEM_SOLVING_INTERMEDIATE
            }
            (CertificateCategory::React, _) => REACT,
            (CertificateCategory::Css, _) => CSS,
            (CertificateCategory::Sql, _) => SQL,
            (CertificateCategory::Python, _) => PYTHON,
            (CertificateCategory::Java, _) => JAVA,
            (CertificateCategory::RestApi, _) => REST_API,
        }
    }
}

/// Derive the detail-modal content for a certificate.
///
/// Total: unknown categories yield [`DEFAULT_DETAIL`].
pub fn describe(category: &str, title: &str) -> CategoryDetail {
    match CertificateCategory::from_code(category) {
        Some(known) => known.detail(CertificateLevel::from_title(title)),
        None => DEFAULT_DETAIL,
    }
}
