//! Audio feedback collaborator.
//!
//! Fire-and-forget: the controller calls `play` and only logs a failure.
//! Nothing here may influence quiz state.

use std::io::{self, Write};
use std::sync::Mutex;

use thiserror::Error;

/// Sound cues the quiz can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The player pressed an answer option.
    OptionPressed,
}

#[derive(Debug, Error)]
#[error("audio cue failed: {0}")]
pub struct AudioError(#[from] pub io::Error);

/// Something that can play a cue.
pub trait AudioCue {
    fn play(&self, cue: Cue) -> Result<(), AudioError>;
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioCue for Silent {
    fn play(&self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Rings the terminal bell on the wrapped stream.
pub struct TerminalBell<W: Write> {
    out: Mutex<W>,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalBell::new(io::stdout())
    }
}

impl TerminalBell<io::Stderr> {
    /// Bell that stays out of a stdout transcript.
    pub fn stderr() -> Self {
        TerminalBell::new(io::stderr())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell {
            out: Mutex::new(out),
        }
    }

    /// Recover the wrapped stream.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> AudioCue for TerminalBell<W> {
    fn play(&self, cue: Cue) -> Result<(), AudioError> {
        match cue {
            Cue::OptionPressed => {
                let mut out = self
                    .out
                    .lock()
                    .map_err(|_| io::Error::other("bell stream poisoned"))?;
                out.write_all(b"\x07")?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_writes_bel_byte() {
        let bell = TerminalBell::new(Vec::new());
        bell.play(Cue::OptionPressed).unwrap();
        bell.play(Cue::OptionPressed).unwrap();
        assert_eq!(bell.into_inner(), b"\x07\x07");
    }

    #[test]
    fn silent_always_succeeds() {
        assert!(Silent.play(Cue::OptionPressed).is_ok());
    }
}
