//! Line-oriented quiz loop.
//!
//! For terminals where the full-screen UI is unwanted, and for scripting.
//! Generic over reader and writer; the progress bar is passed in so tests
//! can hand over a hidden one.

use std::io::{self, BufRead, Write};

use indicatif::ProgressBar;

use crate::quiz::{OptionVisual, QuizController, QuizSummary};
use crate::report::format_summary;
use crate::types::OutputFormat;

/// Play until the player declines a retry or input runs out.
///
/// Returns the summary of the last completed attempt, if any.
pub fn run_plain<R: BufRead, W: Write>(
    quiz: &mut QuizController,
    mut input: R,
    mut out: W,
    bar: &ProgressBar,
) -> io::Result<Option<QuizSummary>> {
    let mut last = None;
    bar.set_length(quiz.len() as u64);
    bar.set_position(quiz.progress_target() as u64);

    loop {
        if let Some(summary) = quiz.summary() {
            last = Some(summary);
            bar.suspend(|| -> io::Result<()> {
                writeln!(out)?;
                write!(out, "{}", format_summary(&summary, OutputFormat::Human))?;
                write!(out, "Try again? [y/N] ")?;
                out.flush()
            })?;
            match read_line(&mut input)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    quiz.restart();
                    bar.set_position(quiz.progress_target() as u64);
                    continue;
                }
                _ => return Ok(last),
            }
        }

        let Some(question) = quiz.current_question().cloned() else {
            return Ok(last);
        };

        bar.suspend(|| -> io::Result<()> {
            writeln!(out)?;
            writeln!(out, "[{}/{}] {}", quiz.question_number(), quiz.len(), question.prompt)?;
            for (i, option) in question.options.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, option)?;
            }
            write!(out, "> ")?;
            out.flush()
        })?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(last);
        };
        if line.is_empty() {
            continue;
        }
        let choice = resolve_choice(&line, &question.options);
        quiz.submit_answer(&choice);

        bar.suspend(|| -> io::Result<()> {
            write_feedback(&mut out, &*quiz, &question.options)?;
            write!(out, "Press Enter to continue ")?;
            out.flush()
        })?;

        if read_line(&mut input)?.is_none() {
            return Ok(last);
        }
        quiz.advance().map_err(io::Error::other)?;
        bar.set_position(quiz.progress_target() as u64);
    }
}

/// Play and report in `format`.
///
/// Human output is the transcript itself. For JSON the transcript goes to
/// `diag` and `out` receives only the final summary.
pub fn play_plain<R: BufRead, W: Write, D: Write>(
    quiz: &mut QuizController,
    format: OutputFormat,
    input: R,
    mut out: W,
    diag: D,
    bar: &ProgressBar,
) -> io::Result<Option<QuizSummary>> {
    match format {
        OutputFormat::Human => run_plain(quiz, input, out, bar),
        OutputFormat::Json => {
            let summary = run_plain(quiz, input, diag, bar)?;
            if let Some(summary) = &summary {
                write!(out, "{}", format_summary(summary, format))?;
                out.flush()?;
            }
            Ok(summary)
        }
    }
}

/// A number picks that option; anything else is taken as typed.
fn resolve_choice(line: &str, options: &[String]) -> String {
    match line.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].clone(),
        _ => line.to_string(),
    }
}

fn write_feedback<W: Write>(out: &mut W, quiz: &QuizController, options: &[String]) -> io::Result<()> {
    for option in options {
        let mark = match quiz.option_visual_state(option) {
            OptionVisual::CorrectHighlight => "✓",
            OptionVisual::IncorrectHighlight => "✗",
            OptionVisual::Neutral => " ",
        };
        writeln!(out, "  {} {}", mark, option)?;
    }
    if let Some(selected) = quiz.selected_option() {
        if !options.iter().any(|o| o == selected) {
            writeln!(out, "  ✗ {} (not an option)", selected)?;
        }
    }
    match quiz.answered_correctly() {
        Some(true) => writeln!(out, "Correct!"),
        _ => writeln!(out, "Wrong."),
    }
}

/// Next trimmed line, or None at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// ============================================================================
// TESTS
// ============================================================================
