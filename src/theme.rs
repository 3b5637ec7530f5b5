use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the serialized [`ThemePreference`].
pub const THEME_STORAGE_KEY: &str = "theme";

/// What the visitor asked for. `System` defers to `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// A concrete theme after `System` has been looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    // the server renders dark before the client knows better
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System if system_prefers_dark => ResolvedTheme::Dark,
            ThemePreference::System => ResolvedTheme::Light,
        }
    }
}

impl ResolvedTheme {
    pub fn is_dark(self) -> bool {
        self == ResolvedTheme::Dark
    }

    pub fn toggled(self) -> ResolvedTheme {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }

    /// The explicit preference a toggle button stores: always the opposite of
    /// what is on screen, never `System`.
    pub fn toggle_preference(self) -> ThemePreference {
        match self.toggled() {
            ResolvedTheme::Light => ThemePreference::Light,
            ResolvedTheme::Dark => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_dark() { "dark" } else { "light" })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution() {
        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_toggle_is_explicit() {
        assert_eq!(ResolvedTheme::Dark.toggle_preference(), ThemePreference::Light);
        assert_eq!(ResolvedTheme::Light.toggle_preference(), ThemePreference::Dark);
        assert_eq!(ResolvedTheme::Light.toggled().toggled(), ResolvedTheme::Light);
    }

    #[test]
    fn test_parse_and_display() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(pref.to_string().parse::<ThemePreference>(), Ok(pref));
        }
        assert_eq!(" Dark ".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert!("sepia".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_storage_format() {
        let json = serde_json::to_string(&ThemePreference::System).unwrap();
        assert_eq!(json, "\"system\"");
        let back: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, ThemePreference::Light);
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }
}
