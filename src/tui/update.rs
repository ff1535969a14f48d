//! Pure state transitions: (App, Action) → Transition.
//!
//! Fully testable without a terminal. Each screen defines which actions
//! it accepts; everything else is `Stay`. The option buttons are disabled
//! once a question is answered, so picks there never reach the quiz.

use crate::quiz::QuizAction;

use super::state::{Action, App, Screen, Transition};

/// Pure state transition function.
pub fn update(app: &App, action: &Action) -> Transition {
    if *action == Action::Quit {
        return Transition::Quit;
    }
    match app.screen() {
        Screen::Question { answered: false } => update_unanswered(app, action),
        Screen::Question { answered: true } => update_answered(app, action),
        Screen::Summary => update_summary(action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Unanswered question: move, pick, restart. Next is disabled.
fn update_unanswered(app: &App, action: &Action) -> Transition {
    match action {
        Action::MoveUp | Action::MoveDown => move_cursor(app, action),
        Action::Select => pick(app, app.cursor),
        Action::Pick(n) if *n >= 1 => pick(app, usize::from(*n) - 1),
        Action::Restart => Transition::Quiz(QuizAction::Restart),
        _ => Transition::Stay,
    }
}

/// Answered question: continue or restart. Options are locked.
fn update_answered(app: &App, action: &Action) -> Transition {
    match action {
        Action::MoveUp | Action::MoveDown => move_cursor(app, action),
        Action::Select | Action::Next => Transition::Quiz(QuizAction::Advance),
        Action::Restart => Transition::Quiz(QuizAction::Restart),
        _ => Transition::Stay,
    }
}

/// Summary: Enter or r plays again.
fn update_summary(action: &Action) -> Transition {
    match action {
        Action::Select | Action::Restart => Transition::Quiz(QuizAction::Restart),
        _ => Transition::Stay,
    }
}

fn move_cursor(app: &App, action: &Action) -> Transition {
    let len = app.option_count();
    let cursor = match action {
        Action::MoveUp => app.cursor.saturating_sub(1),
        _ if len == 0 => 0,
        _ => (app.cursor + 1).min(len - 1),
    };
    Transition::Cursor(cursor)
}

/// Submit the option at `index` if it exists.
fn pick(app: &App, index: usize) -> Transition {
    match app
        .quiz
        .current_question()
        .and_then(|q| q.options.get(index))
    {
        Some(option) => Transition::Quiz(QuizAction::Submit(option.clone())),
        None => Transition::Stay,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizController;
    use crate::quiz::session::tests::questions;

    fn app(correct: &[&str]) -> App {
        App::new(QuizController::new(questions(correct)).unwrap())
    }

    fn answered(correct: &[&str], pick: &str) -> App {
        let mut app = app(correct);
        app.quiz.submit_answer(pick);
        app
    }

    fn completed() -> App {
        let mut app = answered(&["A"], "A");
        app.quiz.advance().unwrap();
        app
    }

    // -- Unanswered --

    #[test]
    fn quit_from_every_screen() {
        assert_eq!(update(&app(&["A"]), &Action::Quit), Transition::Quit);
        assert_eq!(update(&answered(&["A"], "B"), &Action::Quit), Transition::Quit);
        assert_eq!(update(&completed(), &Action::Quit), Transition::Quit);
    }

    #[test]
    fn cursor_down_and_clamp() {
        let mut app = app(&["A"]);
        assert_eq!(update(&app, &Action::MoveDown), Transition::Cursor(1));
        app.cursor = 3;
        assert_eq!(update(&app, &Action::MoveDown), Transition::Cursor(3));
    }

    #[test]
    fn cursor_up_at_top_stays() {
        let app = app(&["A"]);
        assert_eq!(update(&app, &Action::MoveUp), Transition::Cursor(0));
    }

    #[test]
    fn select_submits_focused_option() {
        let mut app = app(&["A"]);
        app.cursor = 2;
        assert_eq!(
            update(&app, &Action::Select),
            Transition::Quiz(QuizAction::Submit("C".into()))
        );
    }

    #[test]
    fn number_picks_option() {
        let app = app(&["A"]);
        assert_eq!(
            update(&app, &Action::Pick(4)),
            Transition::Quiz(QuizAction::Submit("D".into()))
        );
    }

    #[test]
    fn out_of_range_number_is_noop() {
        let app = app(&["A"]);
        assert_eq!(update(&app, &Action::Pick(9)), Transition::Stay);
        assert_eq!(update(&app, &Action::Pick(0)), Transition::Stay);
    }

    #[test]
    fn next_is_disabled_until_answered() {
        let app = app(&["A", "B"]);
        assert_eq!(update(&app, &Action::Next), Transition::Stay);
    }

    // -- Answered --

    #[test]
    fn picks_are_locked_once_answered() {
        let app = answered(&["A", "B"], "A");
        assert_eq!(update(&app, &Action::Pick(2)), Transition::Stay);
    }

    #[test]
    fn select_or_next_advances_once_answered() {
        let app = answered(&["A", "B"], "C");
        assert_eq!(update(&app, &Action::Select), Transition::Quiz(QuizAction::Advance));
        assert_eq!(update(&app, &Action::Next), Transition::Quiz(QuizAction::Advance));
    }

    #[test]
    fn restart_mid_quiz() {
        let app = answered(&["A", "B"], "A");
        assert_eq!(update(&app, &Action::Restart), Transition::Quiz(QuizAction::Restart));
    }

    // -- Summary --

    #[test]
    fn summary_select_restarts() {
        assert_eq!(
            update(&completed(), &Action::Select),
            Transition::Quiz(QuizAction::Restart)
        );
    }

    #[test]
    fn summary_ignores_navigation() {
        let app = completed();
        assert_eq!(update(&app, &Action::MoveDown), Transition::Stay);
        assert_eq!(update(&app, &Action::Next), Transition::Stay);
        assert_eq!(update(&app, &Action::Pick(1)), Transition::Stay);
    }
}
