//! Pure rendering: map App state to ratatui widget trees.
//!
//! `render()` lays out the common frame and dispatches on the derived
//! screen. The current time is passed in so the progress gauge can show
//! the interpolated value.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use crate::quiz::QuizSummary;
use crate::report::headline;
use crate::types::Question;

use super::state::{App, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame, now: Instant) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // progress
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let screen = app.screen();
    frame.render_widget(render_title(screen), chunks[0]);
    frame.render_widget(render_progress(app, now), chunks[1]);
    frame.render_widget(render_help(screen), chunks[3]);

    let content_area = chunks[2];
    match screen {
        Screen::Question { .. } => {
            if let Some(question) = app.quiz.current_question() {
                render_question(app, question, frame, content_area);
            }
        }
        Screen::Summary => {
            if let Some(summary) = app.quiz.summary() {
                render_summary(&summary, frame, content_area);
            }
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(screen: Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Question { .. } => "Museum Quiz",
        Screen::Summary => "Museum Quiz · Results",
    };
    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Gauge at the interpolated progress value.
fn render_progress(app: &App, now: Instant) -> Gauge<'static> {
    let ratio = app.quiz.progress_fraction(now);
    Gauge::default()
        .gauge_style(theme::STYLE_PROGRESS)
        .ratio(ratio)
        .label(format!("{}%", (ratio * 100.0).round() as u32))
}

fn render_help(screen: Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Question { answered: false } => {
            "[j/k] move  [Enter] answer  [1-9] pick  [r] restart  [q] quit"
        }
        Screen::Question { answered: true } => "[Enter/n] next  [r] restart  [q] quit",
        Screen::Summary => "[Enter/r] try again  [q] quit",
    };
    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: QUESTION
// ============================================================================

fn render_question(app: &App, question: &Question, frame: &mut Frame, area: Rect) {
    let quiz = &app.quiz;
    let answered = quiz.is_answered();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} / {}", quiz.question_number(), quiz.len()),
            theme::STYLE_COUNTER,
        )),
        Line::from(Span::styled(format!("  {}", question.prompt), theme::STYLE_PROMPT)),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let visual = quiz.option_visual_state(option);
        let pointer = if i == app.cursor && !answered { ">" } else { " " };
        let text = format!(
            "  {} {}. {}{}",
            pointer,
            i + 1,
            option,
            theme::option_marker(visual)
        );
        let mut style = theme::option_style(visual);
        if i == app.cursor && !answered {
            style = style.patch(theme::STYLE_CURSOR);
        }
        lines.push(Line::from(Span::styled(text, style)));
    }

    lines.push(Line::from(""));
    match quiz.answered_correctly() {
        Some(true) => lines.push(Line::from(Span::styled("  Correct!", theme::STYLE_CORRECT))),
        Some(false) => lines.push(Line::from(Span::styled(
            format!("  Wrong. The answer was {}.", question.correct_option),
            theme::STYLE_INCORRECT,
        ))),
        None => {}
    }

    if let Some(notice) = &app.notice {
        lines.push(Line::from(Span::styled(format!("  {}", notice), theme::STYLE_DIM)));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: SUMMARY
// ============================================================================

fn render_summary(summary: &QuizSummary, frame: &mut Frame, area: Rect) {
    let score_style = if summary.passed {
        theme::STYLE_CORRECT
    } else {
        theme::STYLE_INCORRECT
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", headline(summary)), theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}", summary.score), score_style),
            Span::styled(format!(" / {}", summary.total), theme::STYLE_NEUTRAL),
            Span::styled(format!("   ({}%)", summary.percentage()), theme::STYLE_DIM),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Press Enter to try again", theme::STYLE_DIM)),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================
