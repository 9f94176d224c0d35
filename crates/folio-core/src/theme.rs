#![forbid(unsafe_code)]

//! Light/dark theme preference.
//!
//! The preference round-trips through one browser-storage key and projects
//! onto a single attribute on the document root: the attribute is set to
//! `"light"` for the light theme and removed entirely for dark, which is
//! what the stylesheet keys off. An absent or unrecognized stored value
//! falls back to light.

/// Browser-storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Document-root attribute the stylesheet keys off.
pub const DOCUMENT_ATTRIBUTE: &str = "data-theme";

/// The two themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. `"light"` and an absent key mean
    /// light; anything else means dark.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            None | Some("light") => Self::Light,
            Some(_) => Self::Dark,
        }
    }

    /// Value persisted to storage for this theme.
    #[must_use]
    pub const fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Value for the document-root attribute: `Some("light")` to set it,
    /// `None` to remove it.
    #[must_use]
    pub const fn document_attribute(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_map_to_themes() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        // Unknown junk renders dark, same as any non-"light" value.
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
    }

    #[test]
    fn double_toggle_returns_to_start() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn toggle_flips_the_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn storage_round_trip_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.storage_value())), theme);
        }
    }

    #[test]
    fn attribute_set_for_light_removed_for_dark() {
        assert_eq!(Theme::Light.document_attribute(), Some("light"));
        assert_eq!(Theme::Dark.document_attribute(), None);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
