//! Configuration file loading with precedence handling.

use crate::model::{MatchMode, Orientation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/fview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Case-insensitive matching by default.
    #[serde(default)]
    pub ignore_case: Option<bool>,

    /// Select non-matching lines by default.
    #[serde(default)]
    pub invert_match: Option<bool>,

    /// Interpret the typed pattern as a regular expression.
    #[serde(default)]
    pub regex: Option<bool>,

    /// Result pane orientation ("bottom-up" or "top-down").
    #[serde(default)]
    pub layout: Option<Orientation>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Case-insensitive matching.
    pub ignore_case: bool,
    /// Inverted matching.
    pub invert_match: bool,
    /// Regex matching for the typed pattern.
    pub regex: bool,
    /// Result pane orientation.
    pub layout: Orientation,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            ignore_case: false,
            invert_match: false,
            regex: false,
            layout: Orientation::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Match mode used by both the prefilter and the live filter.
    pub fn match_mode(&self) -> MatchMode {
        MatchMode::literal()
            .with_ignore_case(self.ignore_case)
            .with_invert_match(self.invert_match)
            .with_regex(self.regex)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/fview/fview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("fview").join("fview.log")
    } else {
        PathBuf::from("fview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/fview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/fview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        ignore_case: config.ignore_case.unwrap_or(defaults.ignore_case),
        invert_match: config.invert_match.unwrap_or(defaults.invert_match),
        regex: config.regex.unwrap_or(defaults.regex),
        layout: config.layout.unwrap_or(defaults.layout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FVIEW_LAYOUT`: Override layout (unparseable values are ignored)
/// - `FVIEW_IGNORE_CASE`: `1`/`true` enables, `0`/`false` disables
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(layout) = std::env::var("FVIEW_LAYOUT")
        .ok()
        .and_then(|value| value.parse().ok())
    {
        config.layout = layout;
    }

    if let Ok(value) = std::env::var("FVIEW_IGNORE_CASE") {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => config.ignore_case = true,
            "0" | "false" | "no" => config.ignore_case = false,
            _ => {}
        }
    }

    config
}

/// Overrides coming from command-line flags.
///
/// `None` means the flag was not given and the lower-precedence value stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Force case-insensitive matching on or off.
    pub ignore_case: Option<bool>,
    /// Select non-matching records.
    pub invert_match: Option<bool>,
    /// Treat the live pattern as a regular expression.
    pub regex: Option<bool>,
    /// Result pane orientation.
    pub layout: Option<Orientation>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(ignore_case) = cli.ignore_case {
        config.ignore_case = ignore_case;
    }

    if let Some(invert_match) = cli.invert_match {
        config.invert_match = invert_match;
    }

    if let Some(regex) = cli.regex {
        config.regex = regex;
    }

    if let Some(layout) = cli.layout {
        config.layout = layout;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
