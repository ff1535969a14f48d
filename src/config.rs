//! Configuration file.
//!
//! Optional TOML at `$CONFIG_DIR/museum-quiz/config.toml`. Every field has
//! a default; command-line flags override whatever the file says.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::quiz::Animation;
use crate::quiz::progress::{DEFAULT_DURATION, Easing};

const APP_NAME: &str = "museum-quiz";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Question bank to play. None = built-in bank.
    pub bank: Option<PathBuf>,
    pub animation: AnimationConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Time for the progress bar to reach a new target.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::default(),
        }
    }
}

impl From<AnimationConfig> for Animation {
    fn from(config: AnimationConfig) -> Self {
        Animation {
            duration: Duration::from_millis(config.duration_ms),
            easing: config.easing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    /// Ring the terminal bell when an option is pressed.
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Standard config location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

impl Config {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. The default path is optional: if there
    /// is no file there, defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) => match Self::load(&path) {
                Err(Error::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    Ok(Self::default())
                }
                other => other,
            },
            None => Ok(Self::default()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
