//! Question bank loading and validation.
//!
//! A bank is a JSON array of questions. Loading checks the whole bank
//! before any quiz is built from it, so errors name the offending file.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, QuizError, Result};
use crate::quiz::session::validate_questions;
use crate::types::Question;

/// Bank compiled into the binary, used when none is configured.
const BUILTIN_BANK: &str = include_str!("../assets/questions.json");

/// Shape of a validated bank, for the `check` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankStats {
    pub questions: usize,
    pub min_options: usize,
    pub max_options: usize,
}

/// Read and validate a bank file.
pub fn load_bank(path: &Path) -> Result<Vec<Question>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_bank(&text).map_err(|source| Error::ParseBank {
        path: path.to_path_buf(),
        source,
    })?;
    validate_bank(&questions)?;
    debug!(path = %path.display(), questions = questions.len(), "question bank loaded");
    Ok(questions)
}

/// Load from `path` if given, otherwise the built-in bank.
pub fn load_bank_or_builtin(path: Option<&Path>) -> Result<Vec<Question>> {
    match path {
        Some(p) => load_bank(p),
        None => builtin_bank(),
    }
}

/// The bank shipped with the binary.
pub fn builtin_bank() -> Result<Vec<Question>> {
    let questions = parse_bank(BUILTIN_BANK).map_err(|source| Error::ParseBank {
        path: "<builtin>".into(),
        source,
    })?;
    validate_bank(&questions)?;
    Ok(questions)
}

fn parse_bank(text: &str) -> serde_json::Result<Vec<Question>> {
    serde_json::from_str(text)
}

/// Check a bank is playable: what a session accepts, plus unique ids.
pub fn validate_bank(questions: &[Question]) -> Result<(), QuizError> {
    validate_questions(questions)?;
    for (i, question) in questions.iter().enumerate() {
        if questions[..i].iter().any(|q| q.id == question.id) {
            return Err(QuizError::InvalidQuestion {
                id: question.id,
                reason: "id is used by an earlier question".to_string(),
            });
        }
    }
    Ok(())
}

/// Summarize a validated bank.
pub fn bank_stats(questions: &[Question]) -> BankStats {
    let counts = questions.iter().map(|q| q.options.len());
    BankStats {
        questions: questions.len(),
        min_options: counts.clone().min().unwrap_or(0),
        max_options: counts.max().unwrap_or(0),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_bank(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn builtin_bank_is_valid() {
        let bank = builtin_bank().unwrap();
        assert_eq!(bank.len(), 5);
        for q in &bank {
            assert!(q.options.contains(&q.correct_option));
        }
    }

    #[test]
    fn loads_bank_from_file() {
        let file = write_bank(
            r#"[
                {"id": 1, "question": "One?", "options": ["A", "B"], "correct_option": "A"},
                {"id": 2, "question": "Two?", "options": ["A", "B", "C"], "correct_option": "C"}
            ]"#,
        );
        let bank = load_bank(file.path()).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[1].correct_option, "C");
        assert_eq!(
            bank_stats(&bank),
            BankStats { questions: 2, min_options: 2, max_options: 3 }
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_bank(Path::new("/nonexistent/bank.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_bank("[{\"id\": 1,");
        let err = load_bank(file.path()).unwrap_err();
        assert!(matches!(err, Error::ParseBank { .. }));
    }

    #[test]
    fn empty_bank_is_rejected() {
        let file = write_bank("[]");
        let err = load_bank(file.path()).unwrap_err();
        assert!(matches!(err, Error::Quiz(QuizError::EmptyQuestionBank)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let bank = vec![
            Question::new(1, "One?", ["A"], "A"),
            Question::new(1, "Again?", ["B"], "B"),
        ];
        match validate_bank(&bank) {
            Err(QuizError::InvalidQuestion { id, reason }) => {
                assert_eq!(id, 1);
                assert!(reason.contains("earlier"));
            }
            other => panic!("Expected InvalidQuestion, got {:?}", other),
        }
    }

    #[test]
    fn bank_and_session_reject_the_same_question() {
        use crate::quiz::QuizSession;

        let bank = vec![
            Question::new(1, "One?", ["A", "B"], "A"),
            Question::new(2, "Two?", ["A", "B"], "Z"),
        ];
        let from_bank = validate_bank(&bank).unwrap_err();
        let from_session = QuizSession::new(bank).unwrap_err();
        assert_eq!(from_bank, from_session);
        assert!(matches!(from_bank, QuizError::InvalidQuestion { id: 2, .. }));
    }

    #[test]
    fn absent_path_falls_back_to_builtin() {
        let bank = load_bank_or_builtin(None).unwrap();
        assert_eq!(bank, builtin_bank().unwrap());
    }
}
