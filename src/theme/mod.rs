//! Theme preference model and resolution.
//!
//! DESIGN
//! ======
//! The stored [`ThemePreference`] and the OS color-scheme signal are the only
//! inputs; [`EffectiveTheme`] is always recomputed from them with
//! [`resolve_effective`] and never updated incrementally. Storage, document
//! and OS access sit behind the traits in [`store`], [`document`] and
//! [`signal`] so [`resolver::ThemeResolver`] runs without a browser.
//!
//! TRADE-OFFS
//! ==========
//! An absent preference means `system` and keeps following the OS. Pages
//! that used to default to a literal `light` now track the OS until the user
//! makes an explicit choice.


pub mod browser;
pub mod document;
pub mod resolver;
pub mod signal;
pub mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

pub use document::ThemeDocument;
pub use resolver::ThemeResolver;
pub use signal::ColorSchemeSource;
pub use store::PreferenceStore;

/// The user's stored theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS color scheme.
    #[default]
    System,
}

impl ThemePreference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::InvalidPreference(other.to_owned())),
        }
    }
}

impl From<EffectiveTheme> for ThemePreference {
    fn from(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Self::Light,
            EffectiveTheme::Dark => Self::Dark,
        }
    }
}

/// The theme actually rendered on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the rendered theme from a preference and the OS signal.
///
/// An explicit `light`/`dark` ignores the OS; `system` follows it.
#[must_use]
pub fn resolve_effective(preference: ThemePreference, os_is_dark: bool) -> EffectiveTheme {
    match preference {
        ThemePreference::Light => EffectiveTheme::Light,
        ThemePreference::Dark => EffectiveTheme::Dark,
        ThemePreference::System if os_is_dark => EffectiveTheme::Dark,
        ThemePreference::System => EffectiveTheme::Light,
    }
}
