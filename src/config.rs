//! Player settings
//!
//! Read from an optional JSON file (`hardMode`, `darkMode`, `wordList`); command
//! line flags are applied on top. Exported statistics are read the same way.

use crate::game::ImportStats;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub hard_mode: bool,
    pub dark_mode: bool,
    /// File of accepted guesses; any five letters are accepted when unset
    pub word_list: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        read_json(path)
    }

    /// Parse settings from JSON text
    ///
    /// # Errors
    /// Returns the parser error for malformed input.
    ///
    /// # Examples
    /// ```
    /// use wordull::config::Settings;
    ///
    /// let settings = Settings::from_json(r#"{"hardMode": true}"#).unwrap();
    /// assert!(settings.hard_mode);
    /// assert!(!settings.dark_mode);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply command line overrides
    ///
    /// Flags can only switch hard/dark mode on; a word list flag replaces the
    /// file's.
    #[must_use]
    pub fn with_overrides(
        mut self,
        hard_mode: bool,
        dark_mode: bool,
        word_list: Option<PathBuf>,
    ) -> Self {
        self.hard_mode |= hard_mode;
        self.dark_mode |= dark_mode;
        if word_list.is_some() {
            self.word_list = word_list;
        }
        self
    }
}

/// Load statistics exported from another device
///
/// # Errors
/// Returns `ConfigError` if the file cannot be read or is not a statistics document.
pub fn load_import_stats(path: &Path) -> Result<ImportStats, ConfigError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_missing_keys() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        // Older settings files carry notification keys
        let settings =
            Settings::from_json(r#"{"darkMode": true, "appriseUrl": "", "reminderTime": "20:00"}"#)
                .unwrap();
        assert!(settings.dark_mode);
    }

    #[test]
    fn overrides_take_precedence() {
        let settings = Settings::from_json(r#"{"wordList": "a.txt"}"#)
            .unwrap()
            .with_overrides(true, false, Some(PathBuf::from("b.txt")));
        assert!(settings.hard_mode);
        assert!(!settings.dark_mode);
        assert_eq!(settings.word_list, Some(PathBuf::from("b.txt")));

        let kept = Settings::from_json(r#"{"wordList": "a.txt", "hardMode": true}"#)
            .unwrap()
            .with_overrides(false, false, None);
        assert!(kept.hard_mode);
        assert_eq!(kept.word_list, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn load_reports_path_on_errors() {
        let missing = Settings::load(Path::new("/nonexistent/wordull.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));
        assert!(missing.to_string().contains("/nonexistent/wordull.json"));

        let path = std::env::temp_dir().join(format!("wordull-settings-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let invalid = Settings::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(invalid, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_import_stats_from_file() {
        let path = std::env::temp_dir().join(format!("wordull-import-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"gamesPlayed": 2, "winPercentage": 50, "currentStreak": 1, "maxStreak": 1,
                "guesses": {"4": 1, "fail": 1}}"#,
        )
        .unwrap();
        let imported = load_import_stats(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(imported.games_played, 2);
        assert_eq!(imported.win_percentage, Some(50));
        assert_eq!(imported.guesses.wins_in(4), 1);
        assert_eq!(imported.guesses.fail, 1);
    }
}
