//! Configuration for the mood extension.
//!
//! One setting: the directory holding per-mood icon images. The host's
//! preference store persists it; `serde` derives keep it a plain
//! key/value entry there.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the icon directory.
pub const ICON_DIR_ENV: &str = "MOOD_ICON_DIR";

/// Settings consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodConfig {
    /// Directory resolved against for `<tag>.png` icon files.
    pub icon_dir: PathBuf,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            icon_dir: default_icon_dir(),
        }
    }
}

impl MoodConfig {
    /// Create a config with an explicit icon directory.
    pub fn new(icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            icon_dir: icon_dir.into(),
        }
    }
}

/// Platform default for the icon directory.
///
/// `MOOD_ICON_DIR` beats the computed default. Otherwise the moods
/// directory lives under the client's per-user plugin data:
/// `$HOME/.purple/plugins/moods` on Unix, `%APPDATA%\.purple\plugins\moods`
/// on Windows.
pub fn default_icon_dir() -> PathBuf {
    if let Ok(dir) = env::var(ICON_DIR_ENV) {
        return PathBuf::from(dir);
    }

    let home = if cfg!(target_os = "windows") {
        env::var("APPDATA").unwrap_or_else(|_| ".".to_string())
    } else {
        env::var("HOME").unwrap_or_else(|_| ".".to_string())
    };

    PathBuf::from(home)
        .join(".purple")
        .join("plugins")
        .join("moods")
}
