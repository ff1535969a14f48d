//! museum-quiz: play museum exhibit multiple-choice quizzes in the terminal.

pub mod bank;
pub mod config;
pub mod error;
pub mod logging;
pub mod plain;
pub mod quiz;
pub mod report;
pub mod tui;
pub mod types;
