use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::{Difficulty, InvalidDifficulty};

const APP_DIR_NAME: &str = "ring-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Optional per-user overrides read from a JSON file.
///
/// Every field may be omitted; command-line flags take precedence.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub difficulty: Option<u8>,
    pub win_score: Option<u32>,
    pub seed: Option<u64>,
}

impl Settings {
    /// Returns the validated difficulty, if one was set.
    pub fn difficulty(&self) -> Result<Option<Difficulty>, SettingsError> {
        self.difficulty
            .map(Difficulty::new)
            .transpose()
            .map_err(SettingsError::Difficulty)
    }

    /// Returns the validated win score, if one was set.
    pub fn win_score(&self) -> Result<Option<u32>, SettingsError> {
        match self.win_score {
            Some(0) => Err(SettingsError::ZeroWinScore),
            other => Ok(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid difficulty in settings")]
    Difficulty(#[source] InvalidDifficulty),
    #[error("win score in settings must be greater than zero")]
    ZeroWinScore,
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// Returns the defaults when the file does not exist. Returns `Err` when the
/// file exists but cannot be read or parsed, so the caller can report it
/// before entering raw terminal mode.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_owned(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{Settings, SettingsError, load_settings};
    use crate::config::Difficulty;

    #[test]
    fn missing_settings_file_returns_defaults() {
        let dir = TempDir::new().expect("temp dir should be creatable");

        let settings =
            load_settings(&dir.path().join("settings.json")).expect("missing file is fine");

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn settings_file_overrides_fields() {
        let dir = TempDir::new().expect("temp dir should be creatable");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "difficulty": 2, "seed": 99 }"#).expect("write should succeed");

        let settings = load_settings(&path).expect("valid file should load");

        assert_eq!(
            settings.difficulty().expect("difficulty is in range"),
            Some(Difficulty::new(2).expect("2 is valid"))
        );
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.win_score().expect("unset is fine"), None);
    }

    #[test]
    fn malformed_settings_file_returns_error() {
        let dir = TempDir::new().expect("temp dir should be creatable");
        let path = dir.path().join("settings.json");
        fs::write(&path, "not-json").expect("write should succeed");

        assert!(matches!(
            load_settings(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = TempDir::new().expect("temp dir should be creatable");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "theme": "neon" }"#).expect("write should succeed");

        assert!(load_settings(&path).is_err());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let settings = Settings {
            difficulty: Some(9),
            win_score: Some(0),
            seed: None,
        };

        assert!(matches!(
            settings.difficulty(),
            Err(SettingsError::Difficulty(_))
        ));
        assert!(matches!(
            settings.win_score(),
            Err(SettingsError::ZeroWinScore)
        ));
    }
}
