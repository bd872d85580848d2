use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

/// Default Keep a Changelog preamble written at the top of every generated file.
pub const DEFAULT_PREAMBLE: &str = "# Changelog\nAll notable changes to this project will be documented in this file.\n\nThe format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),\nand this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).\n\n";

/// Name of the configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "gitchangelog.toml";

/// Name of the configuration file looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".gitchangelog.toml";

/// Represents the complete configuration for git-changelog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_marker() -> String {
    ".git".to_string()
}

fn default_reflog() -> PathBuf {
    PathBuf::from(".git/logs/HEAD")
}

fn default_commit_marker() -> String {
    "commit: ".to_string()
}

/// Where the repository boundary and its reflog are found.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    /// Entry whose presence marks a repository root
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Reflog path, relative to the repository root
    #[serde(default = "default_reflog")]
    pub reflog: PathBuf,

    /// Token separating a reflog line's header from the commit message
    #[serde(default = "default_commit_marker")]
    pub commit_marker: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            marker: default_marker(),
            reflog: default_reflog(),
            commit_marker: default_commit_marker(),
        }
    }
}

/// How parsed entries accumulate per category.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AccumulateMode {
    /// Keep every entry in scan order
    #[default]
    Append,
    /// Keep only the most recent entry per category
    Overwrite,
}

/// Order in which category sections are written.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryOrder {
    /// Order in which categories first appear in the reflog
    #[default]
    FirstSeen,
    /// Sorted by category name
    Alphabetical,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ParserConfig {
    #[serde(default)]
    pub accumulate: AccumulateMode,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("CHANGELOG.next.md")
}

/// Where and how the generated changelog is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Output path, relative to the repository root
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub category_order: CategoryOrder,

    /// Replaces the Keep a Changelog preamble. Its byte length is also the
    /// offset at which the previous changelog's body is copied.
    #[serde(default)]
    pub preamble: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: default_output_path(),
            category_order: CategoryOrder::default(),
            preamble: None,
        }
    }
}

impl OutputConfig {
    pub fn preamble(&self) -> &str {
        self.preamble.as_deref().unwrap_or(DEFAULT_PREAMBLE)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitchangelog.toml` in current directory
/// 3. `.gitchangelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ChangelogError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| ChangelogError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}
