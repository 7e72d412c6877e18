//! Color theme preference

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Site color theme, persisted under the `"theme"` preference key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Stored preference, falling back to dark for missing or unknown values
    pub fn from_preference(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(CoreError::invalid_theme(other)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_original() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn preference_defaults_to_dark() {
        assert_eq!(Theme::from_preference(None), Theme::Dark);
        assert_eq!(Theme::from_preference(Some("light")), Theme::Light);
        assert_eq!(Theme::from_preference(Some("sepia")), Theme::Dark);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let err = "Light".parse::<Theme>().unwrap_err();
        assert_eq!(err, CoreError::invalid_theme("Light"));
    }
}
