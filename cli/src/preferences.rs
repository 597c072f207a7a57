//! User preferences persistence.
//!
//! Reads user preferences from `~/.leetpad/preferences.json`. Every field has
//! a default, so a partial file or no file at all is fine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Preferences {
    /// Base URL of the question site; regional mirrors use a different host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Language to fall back to when none can be inferred from the target file.
    #[serde(default)]
    pub language: Option<String>,
}

fn default_host() -> String {
    leetpad_provider::leetcode::DEFAULT_HOST.to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            host: default_host(),
            language: None,
        }
    }
}

/// Get the preferences file path (`~/.leetpad/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".leetpad").join("preferences.json"))
}

/// Load preferences from disk. A missing file yields the defaults.
pub fn load_preferences() -> Result<Preferences, PreferencesError> {
    let path = preferences_path()?;

    if !path.exists() {
        return Ok(Preferences::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&contents)?)
}
