//! Configuration: TOML file with defaults for every field.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{
    AmbientScheme, ColorScheme, FixedScheme, PaletteError, SystemScheme, TagPalette,
    tag_color::TAG_COLORS,
};

pub const CONFIG_ENV_VAR: &str = "PORTFOLIO_CONFIG";
const APP_DIR: &str = "portfolio";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Directory holding `background.jpg`, `profile.jpg` and the CV.
    pub assets_dir: PathBuf,
    /// Preference file. Defaults to the XDG state directory.
    pub state_file: Option<PathBuf>,
    /// `system` consults the desktop; `light`/`dark` pin the ambient signal.
    pub color_scheme: ColorScheme,
    pub palette: PaletteConfig,
    pub window: WindowConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("public"),
            state_file: None,
            color_scheme: ColorScheme::System,
            palette: PaletteConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteConfig {
    pub entries: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            entries: TAG_COLORS.iter().map(|c| c.name.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 820.0,
        }
    }
}

impl PortfolioConfig {
    /// Load from an explicit path, `$PORTFOLIO_CONFIG`, or the XDG config
    /// location. An absent default file yields the defaults; an absent
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.is_empty()
        {
            return Self::from_file(Path::new(&path));
        }
        let path = default_config_path();
        if path.exists() {
            return Self::from_file(&path);
        }
        tracing::debug!(?path, "no configuration file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.palette()?;
        tracing::debug!(?path, "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn palette(&self) -> Result<TagPalette, PaletteError> {
        TagPalette::from_names(&self.palette.entries)
    }

    pub fn state_file(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| state_dir().join("preferences.json"))
    }

    pub fn ambient(&self) -> Box<dyn AmbientScheme> {
        match self.color_scheme {
            ColorScheme::Light => Box::new(FixedScheme(Some(false))),
            ColorScheme::Dark => Box::new(FixedScheme(Some(true))),
            ColorScheme::System => Box::new(SystemScheme::from_env()),
        }
    }
}

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    if let Ok(dir) = std::env::var(var)
        && !dir.is_empty()
    {
        return PathBuf::from(dir).join(APP_DIR);
    }
    match home::home_dir() {
        Some(home) => fallback
            .iter()
            .fold(home, |path, part| path.join(part))
            .join(APP_DIR),
        None => PathBuf::from(".").join(APP_DIR),
    }
}

/// `$XDG_STATE_HOME/portfolio`, falling back to `~/.local/state/portfolio`.
pub fn state_dir() -> PathBuf {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"])
}

/// `$XDG_CONFIG_HOME/portfolio/config.toml`.
pub fn default_config_path() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = PortfolioConfig::from_toml("").unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.palette().unwrap().len(), TAG_COLORS.len());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = PortfolioConfig::from_toml(
            r#"
            color_scheme = "dark"

            [palette]
            entries = ["green"]
            "#,
        )
        .unwrap();
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.palette().unwrap().len(), 1);
        assert_eq!(config.assets_dir, PathBuf::from("public"));
        assert_eq!(config.ambient().prefers_dark(), Some(true));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let config = PortfolioConfig::from_toml("[palette]\nentries = []").unwrap();
        assert_eq!(config.palette(), Err(PaletteError::Empty));
    }
}
