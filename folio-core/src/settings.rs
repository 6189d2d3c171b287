//! User settings
//!
//! Stored as `settings.yaml` in the platform config directory. A missing
//! file yields defaults; command-line flags override individual values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::paginate::DEFAULT_PAGE_SIZE;

/// Environment variable carrying the preferred colour scheme ("dark" or "light")
pub const COLOR_SCHEME_ENV: &str = "FOLIO_COLOR_SCHEME";

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Day,
    Night,
}

/// RGB triplets for the two theme variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub text: &'static str,
    pub background: &'static str,
}

pub const DAY_THEME: ThemeColors = ThemeColors {
    text: "10, 10, 20",
    background: "255, 255, 255",
};

// Same triplets as the day theme; only the variable mapping differs.
pub const NIGHT_THEME: ThemeColors = ThemeColors {
    text: "10, 10, 20",
    background: "255, 255, 255",
};

impl Theme {
    /// Theme matching a preferred colour scheme value
    pub fn from_preference(scheme: Option<&str>) -> Self {
        match scheme {
            Some(s) if s.eq_ignore_ascii_case("dark") => Theme::Night,
            _ => Theme::Day,
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::Day => DAY_THEME,
            Theme::Night => NIGHT_THEME,
        }
    }

    /// Values for the `--color-dark` and `--color-light` variables
    pub fn variables(&self) -> (&'static str, &'static str) {
        let colors = self.colors();
        match self {
            Theme::Day => (colors.text, colors.background),
            Theme::Night => (colors.background, colors.text),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Day => f.write_str("day"),
            Theme::Night => f.write_str("night"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(format!("Invalid theme '{other}'. Expected 'day' or 'night'")),
        }
    }
}

/// Contents of settings.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Books per window
    pub page_size: usize,

    /// Catalog file to load instead of the bundled sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Explicit theme; falls back to the colour scheme preference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE.get(),
            catalog: None,
            theme: None,
        }
    }
}

impl Settings {
    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path()?)
    }

    /// Load and validate settings from a specific path, defaults if it does
    /// not exist
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let settings = Self::read_from_path(path)?;
        settings
            .validate()
            .with_context(|| format!("Invalid settings: {}", path.display()))?;

        Ok(settings)
    }

    /// Parse settings without validating them
    ///
    /// Callers that layer overrides on top run [`Settings::validate`] on the
    /// merged result.
    pub fn read_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;

        let settings: Settings = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;

        Ok(settings)
    }

    /// Write settings to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_yaml_ng::to_string(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings: {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        Ok(())
    }

    /// Page size as a validated value
    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size).context("page_size must be at least 1")
    }

    /// Explicit theme, else the preference from the environment
    pub fn effective_theme(&self) -> Theme {
        self.theme.unwrap_or_else(|| {
            Theme::from_preference(std::env::var(COLOR_SCHEME_ENV).ok().as_deref())
        })
    }

    /// Path of settings.yaml
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.yaml"))
    }

    fn config_dir() -> Result<PathBuf> {
        directories::ProjectDirs::from("io", "folio", "folio")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("folio")))
            .context("Could not determine config directory")
    }
}
