//! Session/presentation context
//!
//! Holds the active locale, theme and role for the running application.
//! The shell creates one instance at start-up and passes it down to every
//! screen; nothing else constructs one.

use crate::error::Error;
use crate::fixtures::{Category, Product};
use crate::i18n::{self, Locale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Message key of the theme's display name.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Presentation mode: student-facing ("user") or staff-facing ("admin").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[serde(alias = "user")]
    Student,
    #[serde(alias = "admin")]
    Staff,
}

impl Role {
    pub fn code(self) -> &'static str {
        match self {
            Self::Student => "user",
            Self::Staff => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" | "student" => Ok(Self::Student),
            "admin" | "staff" => Ok(Self::Staff),
            _ => Err(Error::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Application-wide presentation state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    locale: Locale,
    theme: Theme,
    role: Role,
}

impl SessionContext {
    /// Create a context with English, dark theme and the student role.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a configured locale instead of the default.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Start from a configured theme instead of the default.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_locale(&mut self, locale: Locale) {
        debug!(from = %self.locale, to = %locale, "locale changed");
        self.locale = locale;
    }

    pub fn set_role(&mut self, role: Role) {
        debug!(from = %self.role, to = %role, "role changed");
        self.role = role;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");
    }

    /// Localized string for `key`, or `key` itself when undefined.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.locale, key)
    }

    /// Localized template for `key` with `{name}` placeholders filled in.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        i18n::translate_with(self.locale, key, args)
    }

    /// Product name in the active locale.
    pub fn product_name(&self, product: &Product) -> &'static str {
        product.name.get(self.locale)
    }

    /// Category name in the active locale.
    pub fn category_name(&self, category: &Category) -> &'static str {
        category.name.get(self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureStore;

    #[test]
    fn test_defaults() {
        let session = SessionContext::new();
        assert_eq!(session.locale(), Locale::En);
        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.role(), Role::Student);
    }

    #[test]
    fn test_toggle_theme_twice_is_identity() {
        let mut session = SessionContext::new().with_theme(Theme::Light);
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Dark);
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_lookup_follows_locale() {
        let mut session = SessionContext::new();
        assert_eq!(session.t("home"), "Home");
        session.set_locale(Locale::Fr);
        assert_eq!(session.t("home"), "Accueil");
        session.set_locale(Locale::Ar);
        assert_eq!(session.t("home"), "الرئيسية");
        assert_eq!(session.t("missingKey"), "missingKey");
    }

    #[test]
    fn test_role_codes() {
        assert_eq!("admin".parse::<Role>().ok(), Some(Role::Staff));
        assert_eq!("Student".parse::<Role>().ok(), Some(Role::Student));
        assert!("guest".parse::<Role>().is_err());
        assert_eq!(Role::Staff.to_string(), "admin");
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("LIGHT".parse::<Theme>().ok(), Some(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_localized_fixture_names() {
        let store = FixtureStore::load();
        let mut session = SessionContext::new().with_locale(Locale::Fr);
        let product = store.product("9").expect("fixture");
        assert_eq!(session.product_name(product), "Poulet grillé");
        session.set_locale(Locale::En);
        assert_eq!(session.product_name(product), "Grilled Chicken");

        let category = store.category("dairy").expect("fixture");
        session.set_locale(Locale::Ar);
        assert_eq!(session.category_name(category), "ألبان");
    }
}
