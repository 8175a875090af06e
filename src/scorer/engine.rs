//! Assessment pass - scores, recommendations, and summary in one call

use super::scoring::{percentage, Scorer};
use crate::{AnswerSet, Assessment, AssessmentSummary, CategoryScore, MaturityLevel, QuestionCatalog};

impl Scorer {
    /// Run a full scoring pass over a catalog snapshot and an answer set
    pub fn assess(catalog: &QuestionCatalog, answers: &AnswerSet) -> Assessment {
        for (category, question) in answers.unknown_entries(catalog) {
            tracing::warn!(category, question, "answer does not match any catalog question; ignored");
        }

        let scores = Self::compute_scores(catalog, answers);
        let recommendations = Self::recommendations(&scores);
        let summary = Self::summarize(&scores);

        tracing::debug!(
            categories = summary.categories,
            overall = summary.overall_score,
            "assessment complete"
        );

        Assessment {
            scores,
            recommendations,
            summary,
        }
    }

    /// Totals across category scores
    pub fn summarize(scores: &[CategoryScore]) -> AssessmentSummary {
        let questions: usize = scores.iter().map(|s| s.total).sum();
        let yes_answers: usize = scores.iter().map(|s| s.yes_count).sum();
        let overall_score = percentage(yes_answers, questions);

        AssessmentSummary {
            categories: scores.len(),
            questions,
            yes_answers,
            overall_score,
            overall_level: MaturityLevel::from_score(overall_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Answer;

    fn sample_catalog() -> QuestionCatalog {
        QuestionCatalog::from_pairs([
            ("Security", vec!["MFA enforced?", "Patching automated?"]),
            ("Cloud", vec!["IaC in use?", "Cost tagging?", "Multi-region?"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_assess_parallel_recommendations() {
        let answers = AnswerSet::new()
            .with("Security", "MFA enforced?", Answer::Yes)
            .with("Security", "Patching automated?", Answer::Yes)
            .with("Cloud", "IaC in use?", Answer::Yes);
        let assessment = Scorer::assess(&sample_catalog(), &answers);

        assert_eq!(assessment.scores.len(), 2);
        assert_eq!(assessment.recommendations.len(), 2);
        for (score, rec) in assessment.scores.iter().zip(&assessment.recommendations) {
            assert_eq!(score.category, rec.category);
        }
        assert_eq!(assessment.scores[0].category, "Cloud");
        assert_eq!(assessment.scores[0].score, 33.3);
        assert_eq!(assessment.recommendations[0].level, MaturityLevel::Low);
        assert_eq!(assessment.scores[1].score, 100.0);
        assert_eq!(assessment.recommendations[1].level, MaturityLevel::High);
    }

    #[test]
    fn test_summary_counts_all_questions() {
        let answers = AnswerSet::new()
            .with("Security", "MFA enforced?", Answer::Yes)
            .with("Cloud", "IaC in use?", Answer::Yes)
            .with("Cloud", "Cost tagging?", Answer::No);
        let assessment = Scorer::assess(&sample_catalog(), &answers);

        let summary = &assessment.summary;
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.questions, 5);
        assert_eq!(summary.yes_answers, 2);
        assert_eq!(summary.overall_score, 40.0);
        assert_eq!(summary.overall_level, MaturityLevel::Low);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = Scorer::summarize(&[]);
        assert_eq!(summary.categories, 0);
        assert_eq!(summary.overall_score, 0.0);
    }

    #[test]
    fn test_assess_is_repeatable() {
        let catalog = sample_catalog();
        let answers = AnswerSet::new().with("Cloud", "Multi-region?", Answer::Yes);
        assert_eq!(
            Scorer::assess(&catalog, &answers),
            Scorer::assess(&catalog, &answers)
        );
    }
}
