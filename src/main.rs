//! museum-quiz CLI
//!
//! Play a multiple-choice museum quiz in the terminal.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use museum_quiz::bank::{bank_stats, load_bank, load_bank_or_builtin};
use museum_quiz::config::Config;
use museum_quiz::logging::{self, LogTarget};
use museum_quiz::plain::play_plain;
use museum_quiz::quiz::audio::{AudioCue, Silent, TerminalBell};
use museum_quiz::quiz::{Animation, QuizController};
use museum_quiz::report::{format_bank_stats, format_summary};
use museum_quiz::tui;
use museum_quiz::types::OutputFormat;

#[derive(Parser)]
#[command(name = "museum-quiz")]
#[command(about = "Play a multiple-choice museum quiz in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the full-screen terminal UI
    Play {
        /// Question bank (JSON). Default: configured bank or built-in
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Don't ring the terminal bell on option presses
        #[arg(long)]
        no_audio: bool,

        /// Progress bar animation time in milliseconds
        #[arg(long)]
        duration_ms: Option<u64>,
    },

    /// Play line by line on stdin/stdout
    Plain {
        /// Question bank (JSON). Default: configured bank or built-in
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Don't ring the terminal bell on option presses
        #[arg(long)]
        no_audio: bool,

        /// Format of the final summary
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate a question bank file
    Check {
        /// Bank to validate
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let fullscreen = matches!(cli.command, Commands::Play { .. });
    if let Err(e) = logging::init(LogTarget::choose(cli.log_file.as_deref(), fullscreen)) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Play { bank, no_audio, duration_ms } => {
            cmd_play(cli.config.as_deref(), bank, no_audio, duration_ms)
        }
        Commands::Plain { bank, no_audio, format } => {
            cmd_plain(cli.config.as_deref(), bank, no_audio, format.into())
        }
        Commands::Check { path, format } => cmd_check(&path, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SETUP
// ============================================================================

/// Load config and bank, then build a controller.
fn build_quiz(
    config_path: Option<&Path>,
    bank: Option<PathBuf>,
    audio: impl FnOnce(&Config) -> Box<dyn AudioCue>,
    duration_ms: Option<u64>,
) -> Result<QuizController, String> {
    let config = Config::resolve(config_path).map_err(|e| e.to_string())?;

    let bank_path = bank.or_else(|| config.bank.clone());
    let questions = load_bank_or_builtin(bank_path.as_deref()).map_err(|e| e.to_string())?;

    let mut animation_config = config.animation;
    if let Some(ms) = duration_ms {
        animation_config.duration_ms = ms;
    }
    let animation: Animation = animation_config.into();

    let audio = audio(&config);

    QuizController::with_parts(questions, animation, audio).map_err(|e| e.to_string())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(
    config_path: Option<&Path>,
    bank: Option<PathBuf>,
    no_audio: bool,
    duration_ms: Option<u64>,
) -> Result<(), String> {
    let quiz = build_quiz(
        config_path,
        bank,
        |c| -> Box<dyn AudioCue> {
            if c.audio.enabled && !no_audio {
                Box::new(TerminalBell::stdout())
            } else {
                Box::new(Silent)
            }
        },
        duration_ms,
    )?;

    let summary = tui::run(quiz).map_err(|e| e.to_string())?;
    if let Some(summary) = summary {
        print!("{}", format_summary(&summary, OutputFormat::Human));
    }
    Ok(())
}

fn cmd_plain(
    config_path: Option<&Path>,
    bank: Option<PathBuf>,
    no_audio: bool,
    format: OutputFormat,
) -> Result<(), String> {
    // stderr keeps the bell out of the transcript
    let mut quiz = build_quiz(
        config_path,
        bank,
        |c| -> Box<dyn AudioCue> {
            if c.audio.enabled && !no_audio {
                Box::new(TerminalBell::stderr())
            } else {
                Box::new(Silent)
            }
        },
        None,
    )?;

    let bar = ProgressBar::new(quiz.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len}")
            .map_err(|e| e.to_string())?
            .progress_chars("█▓░"),
    );

    let stdin = io::stdin();
    play_plain(&mut quiz, format, stdin.lock(), io::stdout(), io::stderr(), &bar)
        .map_err(|e| e.to_string())?;
    bar.finish_and_clear();
    Ok(())
}

fn cmd_check(path: &Path, format: OutputFormat) -> Result<(), String> {
    let questions = load_bank(path).map_err(|e| e.to_string())?;
    print!("{}", format_bank_stats(&bank_stats(&questions), format));
    Ok(())
}
