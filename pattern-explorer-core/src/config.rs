// configuration module - toml file, environment overrides and resolved render options

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::code::{DEFAULT_LANGUAGE, DEFAULT_THEME};

pub const CONFIG_ENV: &str = "PATTERN_EXPLORER_CONFIG";
pub const THEME_ENV: &str = "PATTERN_EXPLORER_THEME";
pub const LANGUAGE_ENV: &str = "PATTERN_EXPLORER_LANGUAGE";

/// user preferences, as read from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// syntect theme used for code blocks
    pub theme: String,
    /// language tag used when an example doesn't name one
    pub language: String,
    pub line_numbers: bool,
    /// force colour on or off; unset means "if stdout is a terminal"
    pub color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            line_numbers: false,
            color: None,
        }
    }
}

impl Config {
    /// load from an explicit path, falling back to $PATTERN_EXPLORER_CONFIG, then defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path(path, env::var_os(CONFIG_ENV)) {
            Some(path) => Self::from_file(&path)?,
            None => {
                tracing::debug!("no config file given, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// parse a config file; a missing file means defaults, a malformed one is an error
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read config file {}", path.display()))
            }
        };
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// apply PATTERN_EXPLORER_THEME / PATTERN_EXPLORER_LANGUAGE from the given lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(theme) = lookup(THEME_ENV).filter(|v| !v.trim().is_empty()) {
            self.theme = theme.trim().to_string();
        }
        if let Some(language) = lookup(LANGUAGE_ENV).filter(|v| !v.trim().is_empty()) {
            self.language = language.trim().to_string();
        }
    }
}

/// the flag wins over the environment; a blank environment value counts as unset
fn config_path(flag: Option<&Path>, from_env: Option<OsString>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        from_env
            .filter(|value| !value.to_string_lossy().trim().is_empty())
            .map(PathBuf::from)
    })
}

/// everything the renderers need to know, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub theme: String,
    pub language: String,
    pub line_numbers: bool,
    pub color: bool,
    /// width of horizontal rules, in columns
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::plain()
    }
}

impl RenderOptions {
    /// uncoloured output with default settings, handy for pipes and tests
    pub fn plain() -> Self {
        Self::resolve(&Config::default(), false, 80)
    }

    pub fn resolve(config: &Config, color: bool, width: usize) -> Self {
        Self {
            theme: config.theme.clone(),
            language: config.language.clone(),
            line_numbers: config.line_numbers,
            color,
            width: width.clamp(40, 100),
        }
    }
}

/// current terminal width, or 80 when it can't be determined
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(80)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_original_page() {
        let config = Config::default();
        assert_eq!(config.language, "python");
        assert_eq!(config.theme, "base16-eighties.dark");
        assert!(!config.line_numbers);
        assert_eq!(config.color, None);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "line_numbers = true\ncolor = false").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.line_numbers);
        assert_eq!(config.color, Some(false));
        assert_eq!(config.language, "python");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "line_numbers = \"maybe").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unreadable_path_is_still_an_error() {
        // a directory exists but can't be read as a file
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn blank_env_path_counts_as_unset() {
        assert_eq!(config_path(None, Some(OsString::from(""))), None);
        assert_eq!(config_path(None, Some(OsString::from("  "))), None);
        assert_eq!(config_path(None, None), None);
    }

    #[test]
    fn flag_path_wins_over_env() {
        let flag = Path::new("flag.toml");
        assert_eq!(
            config_path(Some(flag), Some(OsString::from("env.toml"))),
            Some(PathBuf::from("flag.toml"))
        );
        assert_eq!(
            config_path(None, Some(OsString::from("env.toml"))),
            Some(PathBuf::from("env.toml"))
        );
    }

    #[test]
    fn overrides_replace_non_blank_values() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            THEME_ENV => Some("InspiredGitHub".to_string()),
            LANGUAGE_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.theme, "InspiredGitHub");
        assert_eq!(config.language, "python");
    }

    #[test]
    fn render_width_is_clamped() {
        assert_eq!(RenderOptions::resolve(&Config::default(), true, 10).width, 40);
        assert_eq!(RenderOptions::resolve(&Config::default(), true, 300).width, 100);
        assert_eq!(RenderOptions::plain().width, 80);
        assert!(!RenderOptions::plain().color);
    }
}
