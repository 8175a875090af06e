//! Question catalog: ordered categories, each with ordered questions

use crate::error::CatalogError;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Raw catalog document shape: category name -> questions, in document order
pub type RawCatalog = IndexMap<String, Vec<String>>;

/// A validated question catalog.
///
/// Names are trimmed; every category holds at least one question and the
/// catalog holds at least one category, so every category can be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog", into = "RawCatalog")]
pub struct QuestionCatalog {
    categories: IndexMap<String, Vec<String>>,
}

impl QuestionCatalog {
    /// Build a catalog from (category, questions) pairs
    pub fn from_pairs<C, Q, I>(pairs: I) -> Result<Self, CatalogError>
    where
        C: Into<String>,
        Q: Into<String>,
        I: IntoIterator<Item = (C, Vec<Q>)>,
    {
        let raw: RawCatalog = pairs
            .into_iter()
            .map(|(c, qs)| (c.into(), qs.into_iter().map(Into::into).collect()))
            .collect();
        Self::try_from(raw)
    }

    /// Categories with their questions, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, questions)| (name.as_str(), questions.as_slice()))
    }

    /// Questions of a category (name is trimmed before lookup)
    pub fn questions(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category.trim()).map(Vec::as_slice)
    }

    /// Whether the catalog contains this question
    pub fn contains(&self, category: &str, question: &str) -> bool {
        self.questions(category)
            .map(|qs| qs.iter().any(|q| q == question.trim()))
            .unwrap_or(false)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of questions across all categories
    pub fn question_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

impl TryFrom<RawCatalog> for QuestionCatalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, CatalogError> {
        if raw.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut categories = IndexMap::with_capacity(raw.len());
        for (name, questions) in raw {
            let name = name.trim();
            if name.is_empty() {
                return Err(CatalogError::BlankCategory);
            }
            if questions.is_empty() {
                return Err(CatalogError::EmptyCategory(name.to_string()));
            }
            if categories.contains_key(name) {
                return Err(CatalogError::DuplicateCategory(name.to_string()));
            }

            let mut seen = HashSet::with_capacity(questions.len());
            let mut trimmed = Vec::with_capacity(questions.len());
            for question in &questions {
                let question = question.trim();
                if question.is_empty() {
                    return Err(CatalogError::BlankQuestion(name.to_string()));
                }
                if !seen.insert(question) {
                    return Err(CatalogError::DuplicateQuestion {
                        category: name.to_string(),
                        question: question.to_string(),
                    });
                }
                trimmed.push(question.to_string());
            }

            categories.insert(name.to_string(), trimmed);
        }

        Ok(Self { categories })
    }
}

impl From<QuestionCatalog> for RawCatalog {
    fn from(catalog: QuestionCatalog) -> Self {
        catalog.categories
    }
}

/// Parse and validate a catalog from JSON text
pub fn parse_catalog(content: &str) -> Result<QuestionCatalog> {
    let raw: RawCatalog = serde_json::from_str(content).context("Invalid JSON in catalog")?;
    let catalog = QuestionCatalog::try_from(raw)?;
    Ok(catalog)
}

/// Load and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<QuestionCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let raw: RawCatalog = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in catalog: {}", path.display()))?;
    let catalog = QuestionCatalog::try_from(raw)
        .with_context(|| format!("Rejected catalog: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        categories = catalog.len(),
        questions = catalog.question_count(),
        "catalog loaded"
    );
    Ok(catalog)
}
