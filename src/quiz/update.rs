//! Pure state transitions: (QuizSession, QuizAction) → Step.
//!
//! This is the core logic of the quiz. Fully testable without a terminal
//! or a clock. Every accepted action yields a whole new session; a
//! rejected action leaves the caller's session untouched.

use crate::error::QuizError;

use super::session::{Answer, Phase, QuizSession};

/// Player intent, independent of how it was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    /// Pick an option for the current question.
    Submit(String),
    /// Move past an answered question.
    Advance,
    /// Throw the attempt away and start over.
    Restart,
}

/// What an accepted action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An answer was recorded.
    Answered { correct: bool },
    /// Duplicate input; nothing changed.
    Ignored,
    /// Moved on to the question at `index`.
    Advanced { index: usize },
    /// The last question was passed; the attempt is over.
    Completed { score: usize },
    /// Back to the first question with a zero score.
    Restarted,
}

/// Result of a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: QuizSession,
    pub outcome: Outcome,
}

impl Step {
    fn new(session: QuizSession, outcome: Outcome) -> Self {
        Step { session, outcome }
    }
}

/// Pure state transition function.
pub fn update(session: &QuizSession, action: &QuizAction) -> Result<Step, QuizError> {
    match action {
        QuizAction::Submit(option) => Ok(submit(session, option)),
        QuizAction::Advance => advance(session),
        QuizAction::Restart => Ok(restart(session)),
    }
}

// ============================================================================
// PER-ACTION HANDLERS
// ============================================================================

/// Record an answer. Once locked (or completed) further picks are ignored.
fn submit(session: &QuizSession, option: &str) -> Step {
    let question = match session.current_question() {
        Some(q) if !session.answers_locked() => q,
        _ => return Step::new(session.clone(), Outcome::Ignored),
    };

    let correct = question.is_correct(option);
    let answer = Answer {
        selected: option.to_string(),
        correct: question.correct_option.clone(),
    };

    let next = QuizSession {
        answer: Some(answer),
        score: session.score + usize::from(correct),
        ..session.clone()
    };
    Step::new(next, Outcome::Answered { correct })
}

/// Move to the next question, or complete on the last one.
fn advance(session: &QuizSession) -> Result<Step, QuizError> {
    if session.phase == Phase::Completed {
        return Err(QuizError::AlreadyCompleted);
    }
    if !session.answers_locked() {
        return Err(QuizError::NotAnswered {
            index: session.current_index,
        });
    }

    if session.current_index + 1 == session.len() {
        // Index, score and the last answer stay for the summary.
        let next = QuizSession {
            phase: Phase::Completed,
            ..session.clone()
        };
        let score = next.score;
        return Ok(Step::new(next, Outcome::Completed { score }));
    }

    let index = session.current_index + 1;
    let next = QuizSession {
        current_index: index,
        answer: None,
        ..session.clone()
    };
    Ok(Step::new(next, Outcome::Advanced { index }))
}

/// Valid from any state.
fn restart(session: &QuizSession) -> Step {
    Step::new(
        QuizSession::fresh(session.questions.clone()),
        Outcome::Restarted,
    )
}

// ============================================================================
// TESTS
// ============================================================================
