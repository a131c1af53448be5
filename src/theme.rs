//! Visual theme selection, consumed only by presentation code.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Light or dark color scheme.
///
/// Defaults to [`Theme::Light`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    #[display("light")]
    Light,
    /// Dark background, light text.
    #[display("dark")]
    Dark,
}

impl Theme {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
        }
    }

    /// Toggles between `Light` and `Dark`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in Theme::iter() {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }
        let parsed: Wrapper = toml::from_str("theme = \"dark\"").expect("valid toml");
        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
