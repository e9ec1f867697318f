//! Configuration for termtheme
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/termtheme/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::hosts::{Host, UnknownHost, DEFAULT_RECEIVER};
use crate::theme::Catalog;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogFormat, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "Catppuccin Mocha";

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config exists but is invalid. A broken config fails loudly instead of
    /// silently falling back to defaults.
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Host(#[from] UnknownHost),
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name, resolved through the catalog
    pub theme: String,

    /// Host terminal to render for
    pub host: Host,

    /// Object the hterm script calls `set` on
    pub hterm_receiver: String,

    /// Directory holding user theme files (None disables user themes)
    pub themes_dir: Option<PathBuf>,

    /// Copy bundled themes into themes_dir on first run
    pub extract_bundled: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            host: Host::default(),
            hterm_receiver: DEFAULT_RECEIVER.to_string(),
            themes_dir: Catalog::default_themes_dir(),
            extract_bundled: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub host: Option<String>,
    pub hterm_receiver: Option<String>,
    pub themes_dir: Option<String>,
    pub extract_bundled: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/termtheme/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("termtheme").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Config is optional, a template that can't be written only gets traced
        if let Err(e) = Self::write_template(&path) {
            tracing::debug!(path = %path.display(), error = %e, "could not write config template");
        }
    }

    /// Write the default template to `path` unless something is already there
    pub(crate) fn write_template(path: &Path) -> std::io::Result<()> {
        // Don't overwrite existing config
        if path.exists() {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Config::default().to_toml() is the single source of truth
        std::fs::write(path, Self::default().to_toml())
    }

    /// Load file config if it exists. A missing file means defaults.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a file config with an environment lookup
    pub(crate) fn from_sources(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("TERMTHEME_THEME").or(file.theme).unwrap_or(defaults.theme);

        // Host: env > file > default
        let host = match env("TERMTHEME_HOST").or(file.host) {
            Some(value) => value.parse()?,
            None => defaults.host,
        };

        // hterm receiver: file > default
        let hterm_receiver = file.hterm_receiver.unwrap_or(defaults.hterm_receiver);

        // Themes directory: env > file > default
        let themes_dir = env("TERMTHEME_THEMES_DIR")
            .or(file.themes_dir)
            .map(PathBuf::from)
            .or(defaults.themes_dir);

        let extract_bundled = file.extract_bundled.unwrap_or(defaults.extract_bundled);

        // Logging: file section, with TERMTHEME_LOG overriding the level
        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("TERMTHEME_LOG") {
            logging.level = level;
        }

        Ok(Self {
            theme,
            host,
            hterm_receiver,
            themes_dir,
            extract_bundled,
            logging,
        })
    }

    /// Theme catalog rooted at the configured themes directory
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.themes_dir.clone())
    }
}
