//! Quiz session algebra: pure types, zero effects.
//!
//! A `QuizSession` is the whole discrete state of one attempt. It is only
//! ever replaced wholesale by the reducer in `update`; nothing mutates a
//! field in place. The animated progress value is deliberately not part of
//! it (see `progress`).

use std::sync::Arc;

use serde::Serialize;

use crate::error::QuizError;
use crate::types::Question;

// ============================================================================
// STATE
// ============================================================================

/// Whether the attempt is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    InProgress,
    Completed,
}

/// The recorded answer for the current question.
///
/// The selection and the revealed correct option are one value so that
/// they can only ever be set or cleared together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Answer {
    /// What the player picked. Need not be one of the options.
    pub(crate) selected: String,
    /// The current question's correct option, revealed on submission.
    pub(crate) correct: String,
}

impl Answer {
    pub(crate) fn is_correct(&self) -> bool {
        self.selected == self.correct
    }
}

/// One attempt at a fixed, ordered question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub(crate) questions: Arc<[Question]>,
    pub(crate) current_index: usize,
    pub(crate) answer: Option<Answer>,
    pub(crate) score: usize,
    pub(crate) phase: Phase,
}

/// How an option should be drawn, derived from the current answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionVisual {
    Neutral,
    CorrectHighlight,
    IncorrectHighlight,
}

/// Final tally of a completed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

impl QuizSummary {
    /// Score as a whole percentage of the question count.
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.score * 100 / self.total
        }
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Reject an empty list or the first malformed question.
pub fn validate_questions(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyQuestionBank);
    }
    for question in questions {
        question
            .validate()
            .map_err(|reason| QuizError::InvalidQuestion {
                id: question.id,
                reason,
            })?;
    }
    Ok(())
}

impl QuizSession {
    /// Start a fresh attempt.
    ///
    /// Rejects an empty list and any malformed question up front, so an
    /// in-progress session always has a current question.
    pub fn new(questions: impl Into<Arc<[Question]>>) -> Result<Self, QuizError> {
        let questions = questions.into();
        validate_questions(&questions)?;
        Ok(Self::fresh(questions))
    }

    /// Initial state over an already-validated list.
    pub(crate) fn fresh(questions: Arc<[Question]>) -> Self {
        QuizSession {
            questions,
            current_index: 0,
            answer: None,
            score: 0,
            phase: Phase::InProgress,
        }
    }
}

// ============================================================================
// QUERIES
// ============================================================================

impl QuizSession {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed session; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based position for display.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The question being played, or None once completed.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress => self.questions.get(self.current_index),
            Phase::Completed => None,
        }
    }

    /// True once the current question has been answered.
    pub fn answers_locked(&self) -> bool {
        self.answer.is_some()
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.answer.as_ref().map(|a| a.selected.as_str())
    }

    pub fn revealed_correct_option(&self) -> Option<&str> {
        self.answer.as_ref().map(|a| a.correct.as_str())
    }

    /// Whether the recorded answer scored. None while unanswered.
    pub fn answered_correctly(&self) -> Option<bool> {
        self.answer.as_ref().map(Answer::is_correct)
    }

    /// Visual state of `option` under the current answer.
    pub fn option_visual_state(&self, option: &str) -> OptionVisual {
        match &self.answer {
            Some(answer) if option == answer.correct => OptionVisual::CorrectHighlight,
            Some(answer) if option == answer.selected => OptionVisual::IncorrectHighlight,
            _ => OptionVisual::Neutral,
        }
    }

    /// Strictly more than half the questions answered correctly.
    pub fn is_passing(&self) -> bool {
        // score > len / 2 in real arithmetic, kept in integers
        2 * self.score > self.questions.len()
    }

    /// Where the progress indicator should head: the current index while
    /// playing, the full length once completed.
    pub fn progress_target(&self) -> usize {
        match self.phase {
            Phase::InProgress => self.current_index,
            Phase::Completed => self.questions.len(),
        }
    }

    /// Summary for display. Only available once completed.
    pub fn summary(&self) -> Option<QuizSummary> {
        match self.phase {
            Phase::InProgress => None,
            Phase::Completed => Some(QuizSummary {
                score: self.score,
                total: self.questions.len(),
                passed: self.is_passing(),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build `n` questions with options A..D; correct options cycle through
    /// the given letters.
    pub(crate) fn questions(correct: &[&str]) -> Vec<Question> {
        correct
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Question::new(i as u32 + 1, format!("Question {}", i + 1), ["A", "B", "C", "D"], *c)
            })
            .collect()
    }

    fn completed(score: usize, total: usize) -> QuizSession {
        QuizSession {
            questions: questions(&vec!["A"; total]).into(),
            current_index: total - 1,
            answer: Some(Answer {
                selected: "A".into(),
                correct: "A".into(),
            }),
            score,
            phase: Phase::Completed,
        }
    }

    #[test]
    fn new_session_starts_at_first_question() {
        let session = QuizSession::new(questions(&["A", "B"])).unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Phase::InProgress);
        assert!(!session.answers_locked());
        assert_eq!(session.current_question().unwrap().id, 1);
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = QuizSession::new(Vec::<Question>::new()).unwrap_err();
        assert_eq!(err, QuizError::EmptyQuestionBank);
    }

    #[test]
    fn malformed_question_is_rejected() {
        let bad = vec![
            Question::new(1, "ok", ["A", "B"], "A"),
            Question::new(2, "bad", ["A", "B"], "Z"),
        ];
        match QuizSession::new(bad).unwrap_err() {
            QuizError::InvalidQuestion { id, .. } => assert_eq!(id, 2),
            other => panic!("Expected InvalidQuestion, got {:?}", other),
        }
    }

    #[test]
    fn unanswered_options_are_neutral() {
        let session = QuizSession::new(questions(&["A"])).unwrap();
        for option in ["A", "B", "C", "D"] {
            assert_eq!(session.option_visual_state(option), OptionVisual::Neutral);
        }
    }

    #[test]
    fn wrong_answer_highlights_both() {
        let mut session = QuizSession::new(questions(&["A"])).unwrap();
        session.answer = Some(Answer {
            selected: "C".into(),
            correct: "A".into(),
        });
        assert_eq!(session.option_visual_state("A"), OptionVisual::CorrectHighlight);
        assert_eq!(session.option_visual_state("C"), OptionVisual::IncorrectHighlight);
        assert_eq!(session.option_visual_state("B"), OptionVisual::Neutral);
        assert_eq!(session.answered_correctly(), Some(false));
    }

    #[test]
    fn right_answer_highlights_only_correct() {
        let mut session = QuizSession::new(questions(&["B"])).unwrap();
        session.answer = Some(Answer {
            selected: "B".into(),
            correct: "B".into(),
        });
        assert_eq!(session.option_visual_state("B"), OptionVisual::CorrectHighlight);
        for option in ["A", "C", "D"] {
            assert_eq!(session.option_visual_state(option), OptionVisual::Neutral);
        }
    }

    #[test]
    fn passing_needs_strictly_more_than_half() {
        assert!(!completed(2, 4).is_passing());
        assert!(completed(3, 4).is_passing());
        assert!(completed(3, 5).is_passing());
        assert!(!completed(2, 5).is_passing());
        assert!(completed(2, 3).is_passing());
        assert!(!completed(0, 1).is_passing());
    }

    #[test]
    fn completed_session_has_no_current_question() {
        let session = completed(1, 2);
        assert!(session.current_question().is_none());
        assert_eq!(session.progress_target(), 2);
    }

    #[test]
    fn summary_only_when_completed() {
        let session = QuizSession::new(questions(&["A"])).unwrap();
        assert!(session.summary().is_none());

        let summary = completed(3, 5).summary().unwrap();
        assert_eq!(summary, QuizSummary { score: 3, total: 5, passed: true });
        assert_eq!(summary.percentage(), 60);
    }
}
