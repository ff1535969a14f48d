//! Domain types for museum-quiz.
//!
//! Questions are plain data: the quiz core reads them, never mutates them.

use serde::{Deserialize, Serialize};

// ============================================================================
// QUESTIONS
// ============================================================================

/// One multiple-choice question from a bank.
///
/// Field names on the wire follow the exhibit app's question data
/// (`question`, `correct_option`); `prompt` is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within a bank.
    pub id: u32,
    /// The question text shown to the player.
    #[serde(rename = "question", alias = "prompt")]
    pub prompt: String,
    /// Answer options in display order.
    pub options: Vec<String>,
    /// The option that scores. Must be one of `options`.
    pub correct_option: String,
}

impl Question {
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_option: impl Into<String>,
    ) -> Self {
        Question {
            id,
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option: correct_option.into(),
        }
    }

    /// Check the record is well formed.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.options.is_empty() {
            return Err("question has no options".to_string());
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(format!("option \"{}\" appears more than once", option));
            }
        }
        if !self.options.contains(&self.correct_option) {
            return Err(format!(
                "correct option \"{}\" is not one of the options",
                self.correct_option
            ));
        }
        Ok(())
    }

    /// Whether `option` is the scoring answer.
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option == option
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for summaries and bank reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
