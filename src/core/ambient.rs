//! Host colour-scheme signal, consulted only when no preference is stored.

use serde::{Deserialize, Serialize};

pub const SCHEME_OVERRIDE_VAR: &str = "PORTFOLIO_COLOR_SCHEME";

pub trait AmbientScheme {
    /// `Some(true)` when the host prefers dark, `Some(false)` for light,
    /// `None` when the host gives no usable signal.
    fn prefers_dark(&self) -> Option<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorScheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            "system" => Some(ColorScheme::System),
            _ => None,
        }
    }
}

/// A signal pinned by configuration or by a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScheme(pub Option<bool>);

impl AmbientScheme for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Reads the desktop's preference from the process environment.
///
/// Checked in order: the explicit override variable, `GTK_THEME` (a `:dark`
/// variant or a `-dark` theme name), then the terminal `COLORFGBG` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemScheme {
    scheme_override: Option<String>,
    gtk_theme: Option<String>,
    colorfgbg: Option<String>,
}

impl SystemScheme {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            scheme_override: lookup(SCHEME_OVERRIDE_VAR),
            gtk_theme: lookup("GTK_THEME"),
            colorfgbg: lookup("COLORFGBG"),
        }
    }
}

impl AmbientScheme for SystemScheme {
    fn prefers_dark(&self) -> Option<bool> {
        if let Some(scheme) = self.scheme_override.as_deref().and_then(ColorScheme::parse) {
            match scheme {
                ColorScheme::Light => return Some(false),
                ColorScheme::Dark => return Some(true),
                ColorScheme::System => {}
            }
        }

        if let Some(theme) = self.gtk_theme.as_deref().filter(|t| !t.is_empty()) {
            let theme = theme.to_ascii_lowercase();
            return Some(theme.ends_with(":dark") || theme.contains("-dark"));
        }

        // "fg;bg" or "fg;default;bg"; ANSI backgrounds 0-6 and 8 are dark.
        let background = self
            .colorfgbg
            .as_deref()?
            .rsplit(';')
            .next()?
            .trim()
            .parse::<u8>()
            .ok()?;
        Some(matches!(background, 0..=6 | 8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(vars: &[(&str, &str)]) -> SystemScheme {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SystemScheme::from_lookup(move |key| {
            vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn no_signal() {
        assert_eq!(scheme(&[]).prefers_dark(), None);
        assert_eq!(scheme(&[("COLORFGBG", "garbage")]).prefers_dark(), None);
    }

    #[test]
    fn override_wins() {
        let s = scheme(&[(SCHEME_OVERRIDE_VAR, "light"), ("GTK_THEME", "Adwaita:dark")]);
        assert_eq!(s.prefers_dark(), Some(false));
    }

    #[test]
    fn system_override_falls_through() {
        let s = scheme(&[(SCHEME_OVERRIDE_VAR, "system"), ("COLORFGBG", "15;0")]);
        assert_eq!(s.prefers_dark(), Some(true));
    }

    #[test]
    fn gtk_theme_variants() {
        assert_eq!(scheme(&[("GTK_THEME", "Adwaita:dark")]).prefers_dark(), Some(true));
        assert_eq!(scheme(&[("GTK_THEME", "Yaru-dark")]).prefers_dark(), Some(true));
        assert_eq!(scheme(&[("GTK_THEME", "Adwaita")]).prefers_dark(), Some(false));
    }

    #[test]
    fn colorfgbg_background() {
        assert_eq!(scheme(&[("COLORFGBG", "15;0")]).prefers_dark(), Some(true));
        assert_eq!(scheme(&[("COLORFGBG", "0;default;15")]).prefers_dark(), Some(false));
    }
}
