//! TUI module for the interactive terminal quiz.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Screen, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, key reader thread, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
