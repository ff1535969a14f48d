//! TUI state algebra: pure types, zero effects.
//!
//! The quiz controller owns all quiz state. The TUI adds only what a
//! keyboard needs on top of it: which option the cursor is on, a one-line
//! notice, and the quit flag. Which screen is showing is derived from the
//! quiz phase, never stored.

use crossterm::event::KeyEvent;

use crate::quiz::{Phase, QuizAction, QuizController};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The terminal was resized; redraw.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The quiz being played.
    pub quiz: QuizController,

    /// Focused option on the question screen.
    pub cursor: usize,

    /// Shown under the options until the next accepted action.
    pub notice: Option<String>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(quiz: QuizController) -> Self {
        App {
            quiz,
            cursor: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// The screen to show, derived from the quiz.
    pub fn screen(&self) -> Screen {
        match self.quiz.phase() {
            Phase::InProgress => Screen::Question {
                answered: self.quiz.is_answered(),
            },
            Phase::Completed => Screen::Summary,
        }
    }

    /// Option count of the current question (0 on the summary).
    pub fn option_count(&self) -> usize {
        self.quiz
            .current_question()
            .map_or(0, |q| q.options.len())
    }
}

// ============================================================================
// SCREENS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// A question is showing; `answered` once it is locked.
    Question { answered: bool },
    /// Completion summary with retry.
    Summary,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up the option list.
    MoveUp,
    /// Move cursor down the option list.
    MoveDown,
    /// Enter/Space: pick the focused option, or continue once answered.
    Select,
    /// Pick option by 1-based number.
    Pick(u8),
    /// Go to the next question.
    Next,
    /// Start the quiz over.
    Restart,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure TUI transition.
///
/// The update function returns this; the effects boundary applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing to do.
    Stay,
    /// Move the option cursor.
    Cursor(usize),
    /// Hand an action to the quiz controller.
    Quiz(QuizAction),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
