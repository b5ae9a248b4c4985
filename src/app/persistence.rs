use crate::store::{DEFAULT_PADDING, PADDING_OPTIONS};
use crate::themes::{Registry, Theme, DEFAULT_THEME_KEY};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Editor state restored on the next start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Registry key of the current theme.
    pub theme: String,
    pub padding: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_KEY.to_string(),
            padding: DEFAULT_PADDING,
        }
    }
}

impl Settings {
    /// Map saved values onto the registry, falling back to defaults for anything unknown.
    #[must_use]
    pub fn resolve(&self, registry: &Registry) -> (&'static Theme, u16) {
        let theme = registry.find_by_key(&self.theme).unwrap_or_else(|| {
            warn!(theme = %self.theme, "saved theme not found, using default");
            registry.default_theme()
        });
        let padding = if PADDING_OPTIONS.contains(&self.padding) {
            self.padding
        } else {
            warn!(padding = self.padding, "saved padding not supported, using default");
            DEFAULT_PADDING
        };
        (theme, padding)
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("rayframe");
        path
    })
}

#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Settings>>;

    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings kept as TOML on disk.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/rayframe/settings.toml`
    pub fn default_location() -> Option<Self> {
        config_dir().map(|dir| Self::new(dir.join("settings.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(settings))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = toml::to_string(settings)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

/// Saved settings, or defaults when missing or unreadable.
pub fn load_or_default(store: &dyn SettingsStore) -> Settings {
    match store.load() {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(err) => {
            warn!(error = %err, "could not load settings");
            Settings::default()
        }
    }
}
