//! Score calculation and threshold recommendations

use crate::{AnswerSet, CategoryScore, MaturityLevel, QuestionCatalog, Recommendation};

/// Stateless scorer over a catalog and an answer set
pub struct Scorer;

impl Scorer {
    /// Score every category of the catalog.
    ///
    /// A category scores the percentage of its questions answered Yes;
    /// unanswered questions count as No. The result is sorted by category
    /// name, not catalog order.
    pub fn compute_scores(catalog: &QuestionCatalog, answers: &AnswerSet) -> Vec<CategoryScore> {
        let mut scores: Vec<CategoryScore> = catalog
            .iter()
            .map(|(category, questions)| {
                let total = questions.len();
                let yes_count = questions
                    .iter()
                    .filter(|q| answers.is_yes(category, q))
                    .count();
                CategoryScore {
                    category: category.to_string(),
                    score: percentage(yes_count, total),
                    yes_count,
                    total,
                }
            })
            .collect();

        scores.sort_by(|a, b| a.category.cmp(&b.category));
        scores
    }

    /// Recommendation for a category score
    pub fn recommend(score: &CategoryScore) -> Recommendation {
        let level = MaturityLevel::from_score(score.score);
        Recommendation {
            category: score.category.clone(),
            level,
            text: Self::recommendation_text(level),
        }
    }

    /// Recommendations for each score, in the same order
    pub fn recommendations(scores: &[CategoryScore]) -> Vec<Recommendation> {
        scores.iter().map(Self::recommend).collect()
    }

    /// Full recommendation sentence for a level
    pub fn recommendation_text(level: MaturityLevel) -> String {
        format!("{} maturity: focus on {}.", level, level.focus())
    }
}

/// `part / total` as a percentage rounded to one decimal. Zero when `total` is zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_tenth((part as f64 / total as f64) * 100.0)
}

/// Round to one decimal place, ties to even (6.25 -> 6.2, 18.75 -> 18.8)
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
