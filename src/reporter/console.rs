//! Console reporter with colored output

use crate::{Assessment, CategoryScore, MaturityLevel, Recommendation};
use colored::Colorize;
use std::fmt::Write;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output (yes counts per category)
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Print the full report
    pub fn report(&self, assessment: &Assessment) {
        print!("{}", self.render(assessment));
    }

    /// Print one line per category
    pub fn report_quiet(&self, assessment: &Assessment) {
        print!("{}", self.render_quiet(assessment));
    }

    /// Full report as text
    pub fn render(&self, assessment: &Assessment) -> String {
        let mut out = String::new();
        self.write_header(&mut out, assessment);
        self.write_table(&mut out, &assessment.scores);
        self.write_legend(&mut out);
        self.write_recommendations(&mut out, &assessment.recommendations);
        self.write_summary(&mut out, assessment);
        out
    }

    /// `category: score (level)` per line
    pub fn render_quiet(&self, assessment: &Assessment) -> String {
        let mut out = String::new();
        for score in &assessment.scores {
            let level = MaturityLevel::from_score(score.score);
            let _ = writeln!(
                out,
                "{}: {:.1} ({})",
                score.category,
                score.score,
                self.colorize_level(level, &level.to_string())
            );
        }
        out
    }

    fn write_header(&self, out: &mut String, assessment: &Assessment) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.bold("IT Maturity Assessment Results"));
        let _ = writeln!(
            out,
            "   Categories: {} | Questions: {} | Answered Yes: {}",
            assessment.summary.categories,
            assessment.summary.questions,
            assessment.summary.yes_answers
        );
        let _ = writeln!(out);
    }

    fn write_table(&self, out: &mut String, scores: &[CategoryScore]) {
        let width = scores
            .iter()
            .map(|s| s.category.chars().count())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        let _ = writeln!(
            out,
            "   {}",
            self.bold(&format!("{:<width$}  {:>9}  {}", "Category", "Score (%)", "Level"))
        );
        let _ = writeln!(out, "   {}", "-".repeat(width + 2 + 9 + 2 + 8));

        for score in scores {
            let level = MaturityLevel::from_score(score.score);
            let score_str = format!("{:>9.1}", score.score);
            let _ = write!(
                out,
                "   {:<width$}  {}  {}",
                score.category,
                self.colorize_level(level, &score_str),
                self.colorize_level(level, &level.to_string())
            );
            if self.verbose {
                let _ = write!(
                    out,
                    "  {}",
                    self.dimmed(&format!("({}/{} yes)", score.yes_count, score.total))
                );
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out);
    }

    fn write_legend(&self, out: &mut String) {
        let _ = writeln!(out, "   {}", self.bold("Interpretation:"));
        for level in [MaturityLevel::High, MaturityLevel::Moderate, MaturityLevel::Low] {
            let _ = writeln!(
                out,
                "   - {}: {} maturity - {}",
                level.range_label(),
                level,
                level.description()
            );
        }
        let _ = writeln!(out);
    }

    fn write_recommendations(&self, out: &mut String, recommendations: &[Recommendation]) {
        let _ = writeln!(out, "   {}", self.bold("Recommendations:"));
        for rec in recommendations {
            let _ = writeln!(out, "   -> {}: {}", self.bold(&rec.category), rec.text);
        }
        let _ = writeln!(out);
    }

    fn write_summary(&self, out: &mut String, assessment: &Assessment) {
        let summary = &assessment.summary;
        let overall = format!("{:.1}%", summary.overall_score);
        let _ = writeln!(
            out,
            "   Overall: {} ({})",
            self.colorize_level(summary.overall_level, &overall),
            self.colorize_level(summary.overall_level, &summary.overall_level.to_string())
        );
        let _ = writeln!(out);
    }

    fn colorize_level(&self, level: MaturityLevel, s: &str) -> String {
        if !self.use_colors {
            return s.to_string();
        }
        match level {
            MaturityLevel::High => s.green().to_string(),
            MaturityLevel::Moderate => s.yellow().to_string(),
            MaturityLevel::Low => s.red().to_string(),
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.use_colors {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn dimmed(&self, s: &str) -> String {
        if self.use_colors {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, AnswerSet, QuestionCatalog, Scorer};

    fn sample() -> Assessment {
        let catalog = QuestionCatalog::from_pairs([
            ("Security", vec!["q1", "q2"]),
            ("Cloud", vec!["q3"]),
        ])
        .unwrap();
        let answers = AnswerSet::new()
            .with("Security", "q1", Answer::Yes)
            .with("Cloud", "q3", Answer::Yes);
        Scorer::assess(&catalog, &answers)
    }

    #[test]
    fn test_render_table_sorted() {
        let text = ConsoleReporter::new().without_colors().render(&sample());
        let cloud = text.find("Cloud").unwrap();
        let security = text.find("Security").unwrap();
        assert!(cloud < security);
        assert!(text.contains("100.0  High"));
        assert!(text.contains(" 50.0  Moderate"));
    }

    #[test]
    fn test_render_legend_and_recommendations() {
        let text = ConsoleReporter::new().without_colors().render(&sample());
        assert!(text.contains("80%+: High maturity - optimized or automated"));
        assert!(text.contains("50-79%: Moderate maturity - standardized or in transition"));
        assert!(text.contains("Below 50%: Low maturity - ad-hoc or siloed"));
        assert!(text.contains(
            "-> Security: Moderate maturity: focus on standardization, consolidation, and governance improvements."
        ));
        assert!(text.contains("Overall: 66.7% (Moderate)"));
    }

    #[test]
    fn test_verbose_shows_counts() {
        let plain = ConsoleReporter::new().without_colors().render(&sample());
        assert!(!plain.contains("yes)"));
        let verbose = ConsoleReporter::new().without_colors().verbose().render(&sample());
        assert!(verbose.contains("(1/2 yes)"));
    }

    #[test]
    fn test_render_quiet() {
        let text = ConsoleReporter::new().without_colors().render_quiet(&sample());
        assert_eq!(text, "Cloud: 100.0 (High)\nSecurity: 50.0 (Moderate)\n");
    }
}
