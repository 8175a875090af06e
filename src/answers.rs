//! Answers: yes/no responses keyed by (category, question)

use crate::catalog::QuestionCatalog;
use crate::error::AnswerError;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Separator between category and question in flat answer keys
pub const KEY_SEPARATOR: &str = "::";

/// A yes/no response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

impl FromStr for Answer {
    type Err = ();

    /// Accepts "yes"/"no" in any case, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("yes") {
            Ok(Answer::Yes)
        } else if s.eq_ignore_ascii_case("no") {
            Ok(Answer::No)
        } else {
            Err(())
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Yes => write!(f, "Yes"),
            Answer::No => write!(f, "No"),
        }
    }
}

/// Recorded answers. Keys are trimmed; a question without an entry counts as No.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: HashMap<String, HashMap<String, Answer>>,
}

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the one it replaced
    pub fn insert(&mut self, category: &str, question: &str, answer: Answer) -> Option<Answer> {
        self.answers
            .entry(category.trim().to_string())
            .or_default()
            .insert(question.trim().to_string(), answer)
    }

    /// Builder form of [`AnswerSet::insert`]
    pub fn with(mut self, category: &str, question: &str, answer: Answer) -> Self {
        self.insert(category, question, answer);
        self
    }

    /// The recorded answer, if any
    pub fn get(&self, category: &str, question: &str) -> Option<Answer> {
        self.answers
            .get(category.trim())
            .and_then(|qs| qs.get(question.trim()))
            .copied()
    }

    /// True only for a recorded Yes; missing entries are not Yes
    pub fn is_yes(&self, category: &str, question: &str) -> bool {
        self.get(category, question) == Some(Answer::Yes)
    }

    /// Number of recorded answers
    pub fn len(&self) -> usize {
        self.answers.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All recorded (category, question, answer) entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Answer)> {
        self.answers.iter().flat_map(|(category, qs)| {
            qs.iter()
                .map(move |(question, answer)| (category.as_str(), question.as_str(), *answer))
        })
    }

    /// Entries that name no question of the catalog
    pub fn unknown_entries<'a>(
        &'a self,
        catalog: &'a QuestionCatalog,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.iter()
            .filter(move |(category, question, _)| !catalog.contains(category, question))
            .map(|(category, question, _)| (category, question))
    }
}

/// Answers document, either nested by category or flat "Category::Question" keys
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswersDocument {
    Nested(IndexMap<String, IndexMap<String, Value>>),
    Flat(IndexMap<String, Value>),
}

fn parse_value(category: &str, question: &str, value: &Value) -> Result<Answer, AnswerError> {
    let malformed = || AnswerError::Malformed {
        category: category.trim().to_string(),
        question: question.trim().to_string(),
        value: match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    };
    match value {
        Value::String(s) => s.parse().map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}

/// Keys equal after trimming name the same question; a second answer is rejected
fn record(
    set: &mut AnswerSet,
    category: &str,
    question: &str,
    value: &Value,
) -> Result<(), AnswerError> {
    let answer = parse_value(category, question, value)?;
    match set.insert(category, question, answer) {
        Some(_) => Err(AnswerError::Duplicate {
            category: category.trim().to_string(),
            question: question.trim().to_string(),
        }),
        None => Ok(()),
    }
}

impl AnswersDocument {
    fn into_answer_set(self) -> Result<AnswerSet, AnswerError> {
        let mut set = AnswerSet::new();
        match self {
            AnswersDocument::Nested(categories) => {
                for (category, questions) in &categories {
                    for (question, value) in questions {
                        record(&mut set, category, question, value)?;
                    }
                }
            }
            AnswersDocument::Flat(entries) => {
                for (key, value) in &entries {
                    let (category, question) = key
                        .split_once(KEY_SEPARATOR)
                        .ok_or_else(|| AnswerError::MalformedKey(key.clone()))?;
                    record(&mut set, category, question, value)?;
                }
            }
        }
        Ok(set)
    }
}

/// Parse an answers document from JSON text
pub fn parse_answers(content: &str) -> Result<AnswerSet> {
    let doc: AnswersDocument =
        serde_json::from_str(content).context("Answers must be a JSON object")?;
    let answers = doc.into_answer_set()?;
    Ok(answers)
}

/// Load an answers document from a file
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers: {}", path.display()))?;
    let answers =
        parse_answers(&content).with_context(|| format!("Rejected answers: {}", path.display()))?;
    tracing::debug!(path = %path.display(), answers = answers.len(), "answers loaded");
    Ok(answers)
}

/// Nested answers document for a catalog with every question answered No
pub fn answer_template(catalog: &QuestionCatalog) -> IndexMap<String, IndexMap<String, Answer>> {
    catalog
        .iter()
        .map(|(category, questions)| {
            let entries: IndexMap<String, Answer> = questions.iter().map(|q| (q.clone(), Answer::No)).collect();
            (category.to_string(), entries)
        })
        .collect()
}
