//! Integration tests for configuration loading.

mod common;

use std::path::PathBuf;

use common::*;
use portfolio::{PortfolioConfig, config::ConfigError};

#[test]
fn test_load_explicit_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        assets_dir = "/srv/portfolio"
        state_file = "/tmp/prefs.json"
        color_scheme = "light"

        [palette]
        entries = ["green", "teal"]

        [window]
        width = 640.0
        "#,
    )?;

    let config = PortfolioConfig::load(Some(&path))?;
    assert_eq!(config.assets_dir, PathBuf::from("/srv/portfolio"));
    assert_eq!(config.state_file(), PathBuf::from("/tmp/prefs.json"));
    assert_eq!(config.ambient().prefers_dark(), Some(false));
    assert_eq!(config.palette()?.len(), 2);
    assert_eq!(config.window.width, 640.0);
    assert_eq!(config.window.height, 820.0);
    Ok(())
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = PortfolioConfig::load(Some(std::path::Path::new("/nonexistent/portfolio.toml")));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_unknown_palette_entry_rejected_at_load() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[palette]\nentries = [\"chartreuse\"]\n")?;

    let result = PortfolioConfig::load(Some(&path));
    assert!(matches!(
        result,
        Err(ConfigError::Palette(PaletteError::UnknownEntry(_)))
    ));
    Ok(())
}

#[test]
fn test_invalid_toml_rejected() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "color_scheme = \"sepia\"\n")?;

    assert!(matches!(
        PortfolioConfig::load(Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
    Ok(())
}
