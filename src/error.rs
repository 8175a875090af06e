//! Error types for catalog and answer validation

/// A question catalog that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog: no categories")]
    Empty,

    #[error("invalid catalog: category '{0}' has no questions")]
    EmptyCategory(String),

    #[error("invalid catalog: blank category name")]
    BlankCategory,

    #[error("invalid catalog: blank question in category '{0}'")]
    BlankQuestion(String),

    #[error("invalid catalog: duplicate category '{0}'")]
    DuplicateCategory(String),

    #[error("invalid catalog: duplicate question '{question}' in category '{category}'")]
    DuplicateQuestion { category: String, question: String },
}

/// An answers document that cannot be turned into an answer set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("malformed answer for '{category}' / '{question}': expected Yes or No, got '{value}'")]
    Malformed {
        category: String,
        question: String,
        value: String,
    },

    #[error("malformed answer key '{0}': expected 'Category::Question'")]
    MalformedKey(String),

    #[error("duplicate answer for '{category}' / '{question}'")]
    Duplicate { category: String, question: String },
}
