//! Quiz session controller: the effectful shell around the pure reducer.
//!
//! Owns one `QuizSession`, the animated progress bar and the audio
//! collaborator. Every operation runs the reducer, swaps in the new
//! session, then retargets the bar from the session's progress target.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::QuizError;
use crate::types::Question;

use super::audio::{AudioCue, Cue, Silent};
use super::progress::{DEFAULT_DURATION, Easing, ProgressIndicator};
use super::session::{OptionVisual, Phase, QuizSession, QuizSummary};
use super::update::{Outcome, QuizAction, update};

/// Animation settings for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Animation {
    fn default() -> Self {
        Animation {
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
        }
    }
}

pub struct QuizController {
    session: QuizSession,
    progress: ProgressIndicator,
    audio: Box<dyn AudioCue>,
}

impl std::fmt::Debug for QuizController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizController")
            .field("session", &self.session)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

impl QuizController {
    /// Controller with default animation and no sound.
    pub fn new(questions: impl Into<Arc<[Question]>>) -> Result<Self, QuizError> {
        Self::with_parts(questions, Animation::default(), Box::new(Silent))
    }

    pub fn with_parts(
        questions: impl Into<Arc<[Question]>>,
        animation: Animation,
        audio: Box<dyn AudioCue>,
    ) -> Result<Self, QuizError> {
        let session = QuizSession::new(questions)?;
        info!(questions = session.len(), "quiz session started");
        Ok(QuizController {
            session,
            progress: ProgressIndicator::new(animation.duration, animation.easing, Instant::now()),
            audio,
        })
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Record `option` as the answer to the current question.
    ///
    /// Ignored once the question is answered, so duplicate presses are
    /// harmless.
    pub fn submit_answer(&mut self, option: &str) -> Outcome {
        match self.dispatch(QuizAction::Submit(option.to_string())) {
            Ok(outcome) => outcome,
            // submit never fails in the reducer
            Err(_) => Outcome::Ignored,
        }
    }

    /// Move past the answered question.
    pub fn advance(&mut self) -> Result<Outcome, QuizError> {
        self.dispatch(QuizAction::Advance)
    }

    /// Start the attempt over. Valid in any state.
    pub fn restart(&mut self) {
        // restart never fails in the reducer
        let _ = self.dispatch(QuizAction::Restart);
    }

    /// Run one action through the reducer and apply its effects.
    pub fn dispatch(&mut self, action: QuizAction) -> Result<Outcome, QuizError> {
        self.dispatch_at(action, Instant::now())
    }

    pub(crate) fn dispatch_at(
        &mut self,
        action: QuizAction,
        now: Instant,
    ) -> Result<Outcome, QuizError> {
        if matches!(action, QuizAction::Submit(_)) {
            self.press_cue();
        }

        let step = update(&self.session, &action).inspect_err(|e| {
            warn!(error = %e, ?action, "quiz action rejected");
        })?;

        self.session = step.session;

        match step.outcome {
            Outcome::Answered { correct } => {
                debug!(
                    question = self.session.question_number(),
                    correct,
                    score = self.session.score(),
                    "answer recorded"
                );
            }
            Outcome::Ignored => {
                debug!(?action, "input ignored");
            }
            Outcome::Advanced { index } => {
                debug!(index, "advanced");
                self.progress.retarget(self.session.progress_target(), now);
            }
            Outcome::Completed { score } => {
                info!(
                    score,
                    total = self.session.len(),
                    passed = self.session.is_passing(),
                    "quiz completed"
                );
                self.progress.retarget(self.session.progress_target(), now);
            }
            Outcome::Restarted => {
                info!("quiz restarted");
                self.progress.retarget(self.session.progress_target(), now);
            }
        }

        Ok(step.outcome)
    }

    /// Ring the press cue while the option buttons are live.
    fn press_cue(&self) {
        if self.session.phase() != Phase::InProgress || self.session.answers_locked() {
            return;
        }
        if let Err(e) = self.audio.play(Cue::OptionPressed) {
            warn!(error = %e, "audio cue failed");
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    pub fn option_visual_state(&self, option: &str) -> OptionVisual {
        self.session.option_visual_state(option)
    }

    pub fn score(&self) -> usize {
        self.session.score()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn is_passing(&self) -> bool {
        self.session.is_passing()
    }

    pub fn len(&self) -> usize {
        self.session.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.is_empty()
    }

    pub fn question_number(&self) -> usize {
        self.session.question_number()
    }

    pub fn is_answered(&self) -> bool {
        self.session.answers_locked()
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.session.selected_option()
    }

    pub fn answered_correctly(&self) -> Option<bool> {
        self.session.answered_correctly()
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        self.session.summary()
    }

    /// The value the progress bar is heading for.
    pub fn progress_target(&self) -> usize {
        self.session.progress_target()
    }

    pub fn progress_value(&self, now: Instant) -> f64 {
        self.progress.value_at(now)
    }

    pub fn progress_fraction(&self, now: Instant) -> f64 {
        self.progress.fraction_at(now, self.session.len())
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress.is_animating(now)
    }
}

// ============================================================================
// TESTS
// ============================================================================
