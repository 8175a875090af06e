//! Maturity: IT maturity assessment scorer
//!
//! This library scores a yes/no questionnaire grouped by category. Each
//! category gets the percentage of its questions answered Yes, and each
//! score maps to a maturity level with a canned recommendation.

pub mod answers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod reporter;
pub mod scorer;

pub use answers::{Answer, AnswerSet};
pub use catalog::QuestionCatalog;
pub use error::{AnswerError, CatalogError};
pub use scorer::Scorer;

use serde::{Deserialize, Serialize};

/// Lowest score that counts as high maturity
pub const HIGH_THRESHOLD: f64 = 80.0;
/// Lowest score that counts as moderate maturity
pub const MODERATE_THRESHOLD: f64 = 50.0;

/// Score of a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// Category name (trimmed)
    pub category: String,
    /// Percentage of questions answered Yes, rounded to one decimal (0.0-100.0)
    pub score: f64,
    /// Number of questions answered Yes
    pub yes_count: usize,
    /// Number of questions in the category
    pub total: usize,
}

/// Maturity bucket a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityLevel {
    High,
    Moderate,
    Low,
}

impl MaturityLevel {
    /// Bucket a score. Lower bounds are inclusive: 80.0 is High, 50.0 is Moderate.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            MaturityLevel::High
        } else if score >= MODERATE_THRESHOLD {
            MaturityLevel::Moderate
        } else {
            MaturityLevel::Low
        }
    }

    /// Short interpretation of the level, as shown in the legend
    pub fn description(self) -> &'static str {
        match self {
            MaturityLevel::High => "optimized or automated",
            MaturityLevel::Moderate => "standardized or in transition",
            MaturityLevel::Low => "ad-hoc or siloed",
        }
    }

    /// Where a category at this level should focus next
    pub fn focus(self) -> &'static str {
        match self {
            MaturityLevel::High => "optimizing with automation and cross-domain integration",
            MaturityLevel::Moderate => {
                "standardization, consolidation, and governance improvements"
            }
            MaturityLevel::Low => "modernization, documentation, and automation",
        }
    }

    /// Score range label for the legend
    pub fn range_label(self) -> &'static str {
        match self {
            MaturityLevel::High => "80%+",
            MaturityLevel::Moderate => "50-79%",
            MaturityLevel::Low => "Below 50%",
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaturityLevel::High => write!(f, "High"),
            MaturityLevel::Moderate => write!(f, "Moderate"),
            MaturityLevel::Low => write!(f, "Low"),
        }
    }
}

/// Recommendation for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: String,
    pub level: MaturityLevel,
    /// Full recommendation sentence
    pub text: String,
}

/// Totals across every category of an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    /// Number of categories scored
    pub categories: usize,
    /// Number of questions across all categories
    pub questions: usize,
    /// Number of questions answered Yes
    pub yes_answers: usize,
    /// Percentage of all questions answered Yes (0.0-100.0)
    pub overall_score: f64,
    pub overall_level: MaturityLevel,
}

/// Result of one scoring pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Category scores, sorted by category name
    pub scores: Vec<CategoryScore>,
    /// One recommendation per score, in the same order
    pub recommendations: Vec<Recommendation>,
    pub summary: AssessmentSummary,
}

impl Assessment {
    /// Categories scoring strictly below `threshold`
    pub fn below_threshold(&self, threshold: f64) -> Vec<&CategoryScore> {
        self.scores.iter().filter(|s| s.score < threshold).collect()
    }
}

/// Public API: score an answers document against a catalog document.
///
/// * `catalog_path` - JSON catalog (category -> list of questions)
/// * `answers_path` - JSON answers document; None scores with no answers recorded
pub fn assess_files(
    catalog_path: &std::path::Path,
    answers_path: Option<&std::path::Path>,
) -> anyhow::Result<Assessment> {
    let catalog = catalog::load_catalog(catalog_path)?;
    let answers = match answers_path {
        Some(path) => answers::load_answers(path)?,
        None => AnswerSet::new(),
    };
    Ok(Scorer::assess(&catalog, &answers))
}
