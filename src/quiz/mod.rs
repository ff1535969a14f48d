//! Quiz core.
//!
//! Organized along FP/Unix boundaries:
//! - `session`: pure data (QuizSession, Phase, OptionVisual) and queries
//! - `update`: pure transitions
//! - `progress`: the animated bar, time passed in explicitly
//! - `audio`: the sound collaborator
//! - `controller`: effects (clock, audio, logging) around the pure core

pub mod audio;
pub mod controller;
pub mod progress;
pub mod session;
pub mod update;

pub use controller::{Animation, QuizController};
pub use session::{OptionVisual, Phase, QuizSession, QuizSummary};
pub use update::{Outcome, QuizAction, Step};
