//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: correct answer, passed
//! - Red: wrong pick, failed
//! - Blue: question text and counters
//! - Cyan: progress and keybinding hints
//! - Dim: de-emphasized (unpicked options after answering, help)

use ratatui::style::{Color, Modifier, Style};

use crate::quiz::OptionVisual;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Correct option / passed.
pub const STYLE_CORRECT: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Wrong pick / failed.
pub const STYLE_INCORRECT: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Option nobody picked.
pub const STYLE_NEUTRAL: Style = Style::new().fg(Color::Gray);

/// De-emphasized text.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Question prompt.
pub const STYLE_PROMPT: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

/// "2 / 5" counter above the prompt.
pub const STYLE_COUNTER: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::DIM);

/// Focused option row.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Progress bar fill.
pub const STYLE_PROGRESS: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Style for an option in the given visual state.
pub fn option_style(visual: OptionVisual) -> Style {
    match visual {
        OptionVisual::Neutral => STYLE_NEUTRAL,
        OptionVisual::CorrectHighlight => STYLE_CORRECT,
        OptionVisual::IncorrectHighlight => STYLE_INCORRECT,
    }
}

/// Marker drawn after an option in the given visual state.
pub fn option_marker(visual: OptionVisual) -> &'static str {
    match visual {
        OptionVisual::Neutral => "",
        OptionVisual::CorrectHighlight => " ✓",
        OptionVisual::IncorrectHighlight => " ✗",
    }
}

// ============================================================================
// TESTS
// ============================================================================
