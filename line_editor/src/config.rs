// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Editor settings, loaded from a JSON file or built in code.
//!
//! ```json
//! {
//!   "history_file": "/home/me/.local/share/line_editor_history",
//!   "history_max_size": 500,
//!   "word_boundaries": ["\\s", "[[:punct:]]"],
//!   "bindings": [
//!     { "matcher": { "exact": "\u0019" }, "action": "move_end" },
//!     { "matcher": { "range": { "from": "\u001c", "to": "\u001f" } }, "action": "swallow" },
//!     { "matcher": { "pattern": "\u001b[0-9]" }, "action": "swallow" }
//!   ]
//! }
//! ```
//!
//! Every field is optional. Configured bindings go in front of the default table, so they
//! win over it.

use crate::{DEBUG_LINE_EDITOR_MOD, DEFAULT_WORD_BOUNDARIES, EditOp, FallbackAction,
            HISTORY_SIZE_MAX, Handler, KeyBindings, KeyMatcher, ReadlineError};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{fmt::{Display, Formatter},
          fs,
          path::{Path, PathBuf},
          str::FromStr};

pub const DEFAULT_SEARCH_PROMPT: &str = "(reverse-i-search: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// [None] keeps the history in memory only.
    pub history_file: Option<PathBuf>,
    pub history_max_size: usize,
    /// Regex fragments; a char matching any of them separates words.
    pub word_boundaries: Vec<String>,
    pub search_prompt: String,
    /// What happens to keys that no binding matches.
    pub fallback: FallbackAction,
    pub bindings: Vec<BindingConfig>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_max_size: HISTORY_SIZE_MAX,
            word_boundaries: DEFAULT_WORD_BOUNDARIES.iter().map(ToString::to_string).collect(),
            search_prompt: DEFAULT_SEARCH_PROMPT.to_string(),
            fallback: FallbackAction::default(),
            bindings: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    pub matcher: MatcherConfig,
    /// An [`EditOp`] name, eg: `"transpose_word"`.
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherConfig {
    Exact(String),
    Range { from: char, to: char },
    Pattern(String),
}

impl MatcherConfig {
    /// # Errors
    ///
    /// Returns an error if a pattern does not compile.
    pub fn try_build(&self) -> Result<KeyMatcher, ReadlineError> {
        Ok(match self {
            Self::Exact(token) => KeyMatcher::exact(token.as_str()),
            Self::Range { from, to } => KeyMatcher::Range(*from, *to),
            Self::Pattern(pattern) => KeyMatcher::try_pattern(pattern)?,
        })
    }
}

impl BindingConfig {
    /// # Errors
    ///
    /// Returns an error if the action is unknown, or the matcher pattern does not compile.
    pub fn try_build(&self) -> Result<Handler, ReadlineError> {
        let op = EditOp::from_str(&self.action)
            .map_err(|_| ReadlineError::UnknownEditOp(self.action.clone()))?;
        Ok(Handler::new(self.matcher.try_build()?, op))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigPaths {
    TopLevelFolderName,
    ConfigFile,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "r3bl-line-editor",
            ConfigPaths::ConfigFile => "config.json",
        };
        write!(f, "{path}")
    }
}

impl EditorConfig {
    /// Where the config file is expected, eg: `~/.config/r3bl-line-editor/config.json` on
    /// Linux. [None] if the platform has no config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        let folder = config_dir()?.join(ConfigPaths::TopLevelFolderName.to_string());
        Some(folder.join(ConfigPaths::ConfigFile.to_string()))
    }

    /// # Errors
    ///
    /// Returns an error if the file can not be read or is not valid JSON for this type.
    pub fn try_load(path: &Path) -> Result<Self, ReadlineError> {
        let content = fs::read_to_string(path).map_err(|source| ReadlineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&content).map_err(|source| ReadlineError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        // % is Display, ? is Debug.
        tracing::info!(
            message = "EditorConfig::try_load",
            path = %path.display(),
            bindings = config.bindings.len()
        );

        Ok(config)
    }

    /// Like [`Self::try_load`], but a missing file gives the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can not be loaded.
    pub fn try_load_or_default(path: &Path) -> Result<Self, ReadlineError> {
        if path.exists() {
            Self::try_load(path)
        } else {
            DEBUG_LINE_EDITOR_MOD.then(|| {
                tracing::debug!(
                    message = "EditorConfig::try_load_or_default -> no file, using defaults",
                    path = %path.display()
                );
            });
            Ok(Self::default())
        }
    }

    /// The configured bindings, in front of the default table.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured binding is invalid.
    pub fn try_build_key_bindings(&self) -> Result<KeyBindings, ReadlineError> {
        let overrides = self
            .bindings
            .iter()
            .map(BindingConfig::try_build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KeyBindings::default()
            .with_overrides(overrides)
            .with_fallback(self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_empty_object_is_default() {
        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.history_max_size, 1_000);
        assert_eq!(config.search_prompt, "(reverse-i-search: ");
    }

    #[test]
    fn test_bindings_parse_and_build() {
        let config: EditorConfig = serde_json::from_str(
            r#"{
                "fallback": "ignore",
                "bindings": [
                    { "matcher": { "exact": "\u0019" }, "action": "move_end" },
                    { "matcher": { "range": { "from": "0", "to": "9" } }, "action": "swallow" },
                    { "matcher": { "pattern": "\u001b[0-9]" }, "action": "move_start" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.bindings[1].matcher,
            MatcherConfig::Range { from: '0', to: '9' }
        );

        let bindings = config.try_build_key_bindings().unwrap();
        assert_eq!(bindings.resolve("\x19"), Some(EditOp::MoveEnd));
        assert_eq!(bindings.resolve("7"), Some(EditOp::Swallow));
        assert_eq!(bindings.resolve("\x1b3"), Some(EditOp::MoveStart));
        assert_eq!(bindings.resolve("\x01"), Some(EditOp::MoveStart));
        assert_eq!(bindings.fallback, FallbackAction::Ignore);
    }

    #[test]
    fn test_unknown_action() {
        let config = EditorConfig {
            bindings: vec![BindingConfig {
                matcher: MatcherConfig::Exact("x".to_string()),
                action: "explode".to_string(),
            }],
            ..EditorConfig::default()
        };
        assert!(matches!(
            config.try_build_key_bindings(),
            Err(ReadlineError::UnknownEditOp(name)) if name == "explode"
        ));
    }

    #[test]
    fn test_bad_pattern() {
        let config = EditorConfig {
            bindings: vec![BindingConfig {
                matcher: MatcherConfig::Pattern("(".to_string()),
                action: "swallow".to_string(),
            }],
            ..EditorConfig::default()
        };
        assert!(matches!(
            config.try_build_key_bindings(),
            Err(ReadlineError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "history_max_size": 5, "search_prompt": "? " }"#).unwrap();

        let config = EditorConfig::try_load(&path).unwrap();
        assert_eq!(config.history_max_size, 5);
        assert_eq!(config.search_prompt, "? ");
        assert_eq!(config.word_boundaries, vec![r"\s", r"[[:punct:]]"]);
    }

    #[test]
    fn test_load_errors_carry_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            EditorConfig::try_load(&missing),
            Err(ReadlineError::ConfigRead { path, .. }) if path == missing
        ));
        assert_eq!(
            EditorConfig::try_load_or_default(&missing).unwrap(),
            EditorConfig::default()
        );

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            EditorConfig::try_load(&broken),
            Err(ReadlineError::ConfigParse { .. })
        ));
        assert!(EditorConfig::try_load_or_default(&broken).is_err());
    }

    #[test]
    fn test_default_path_ends_with_config_file() {
        if let Some(path) = EditorConfig::default_path() {
            assert!(path.ends_with("r3bl-line-editor/config.json"));
        }
    }
}
