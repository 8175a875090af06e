//! JSON reporter for machine-readable output

use crate::{Assessment, AssessmentSummary, CategoryScore, Recommendation};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
    /// Whether to include the generation timestamp
    timestamp: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self {
            pretty: false,
            timestamp: true,
        }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Omit the `generatedAt` field (stable output for diffs and tests)
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = false;
        self
    }

    /// Report an assessment as JSON
    pub fn report(&self, assessment: &Assessment) -> String {
        let output = JsonOutput {
            generated_at: self.timestamp.then(|| chrono::Utc::now().to_rfc3339()),
            scores: &assessment.scores,
            recommendations: &assessment.recommendations,
            summary: &assessment.summary,
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    scores: &'a [CategoryScore],
    recommendations: &'a [Recommendation],
    summary: &'a AssessmentSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, AnswerSet, QuestionCatalog, Scorer};

    fn sample() -> Assessment {
        let catalog =
            QuestionCatalog::from_pairs([("B", vec!["q3"]), ("A", vec!["q1", "q2"])]).unwrap();
        let answers = AnswerSet::new()
            .with("A", "q1", Answer::Yes)
            .with("A", "q2", Answer::No)
            .with("B", "q3", Answer::Yes);
        Scorer::assess(&catalog, &answers)
    }

    #[test]
    fn test_json_has_expected_keys() {
        let json = JsonReporter::new().report(&sample());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("generatedAt").is_some());
        assert!(parsed.get("scores").is_some());
        assert!(parsed.get("recommendations").is_some());
        assert!(parsed.get("summary").is_some());

        let scores = parsed["scores"].as_array().unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0]["category"], "A");
        assert_eq!(scores[0]["score"], 50.0);
        assert_eq!(scores[0]["yesCount"], 1);
        assert_eq!(scores[1]["category"], "B");
        assert_eq!(scores[1]["score"], 100.0);
    }

    #[test]
    fn test_json_recommendations_parallel_scores() {
        let json = JsonReporter::new().without_timestamp().report(&sample());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("generatedAt").is_none());
        let recs = parsed["recommendations"].as_array().unwrap();
        assert_eq!(recs[0]["category"], "A");
        assert_eq!(recs[0]["level"], "moderate");
        assert_eq!(recs[1]["level"], "high");
    }

    #[test]
    fn test_json_summary() {
        let json = JsonReporter::new().report(&sample());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let summary = &parsed["summary"];
        assert_eq!(summary["categories"], 2);
        assert_eq!(summary["questions"], 3);
        assert_eq!(summary["yesAnswers"], 2);
        assert_eq!(summary["overallScore"], 66.7);
        assert_eq!(summary["overallLevel"], "moderate");
    }

    #[test]
    fn test_json_pretty_output() {
        let json = JsonReporter::new().pretty().report(&sample());
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }
}
