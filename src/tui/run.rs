//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only TUI module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A key reader thread feeds an mpsc channel. While the progress bar is
//! animating the loop wakes on a short timeout to redraw; otherwise it
//! blocks until the next key.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::quiz::{Outcome, QuizController, QuizSummary};

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

/// Redraw interval while the progress bar moves.
const FRAME: Duration = Duration::from_millis(30);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),

        // Direct picks
        KeyCode::Char(c @ '1'..='9') => Some(Action::Pick(c as u8 - b'0')),

        // Flow
        KeyCode::Char('n') => Some(Action::Next),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Restores the terminal when dropped, on error paths too.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn new(restore: fn() -> io::Result<()>) -> Self {
        TerminalGuard { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            debug!(error = %e, "terminal restore failed");
        }
    }
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Spawn a thread that forwards key presses and resizes to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                // Windows reports releases too
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx.send(event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Play `quiz` in the terminal until the user quits.
///
/// Returns the summary of the attempt on screen at exit, if it was
/// completed.
pub fn run(quiz: QuizController) -> io::Result<Option<QuizSummary>> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard::new(restore_terminal);
    let mut app = App::new(quiz);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame, Instant::now()))?;

        if app.should_quit {
            break;
        }

        let event = if app.quiz.is_animating(Instant::now()) {
            match rx.recv_timeout(FRAME) {
                Ok(e) => e,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match rx.recv() {
                Ok(e) => e,
                Err(_) => break, // all senders dropped
            }
        };

        if let AppEvent::Key(key) = event {
            if let Some(action) = map_key(key) {
                let transition = update(&app, &action);
                apply(&mut app, transition);
            }
        }
    }

    Ok(app.quiz.summary())
}

/// Apply a pure transition to the app.
pub fn apply(app: &mut App, transition: Transition) {
    match transition {
        Transition::Stay => {}
        Transition::Cursor(cursor) => app.cursor = cursor,
        Transition::Quit => app.should_quit = true,
        Transition::Quiz(action) => match app.quiz.dispatch(action) {
            Ok(outcome) => {
                app.notice = None;
                if matches!(outcome, Outcome::Advanced { .. } | Outcome::Restarted) {
                    app.cursor = 0;
                }
            }
            Err(e) => {
                debug!(error = %e, "transition refused by quiz");
                app.notice = Some(e.to_string());
            }
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
