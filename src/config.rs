//! Page behavior configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates may embed a `<script id="chat-ui-config" type="application/json">`
//! block to override any of these values. Every field has a default, so an
//! empty object (or no block at all) yields the stock daisyUI behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::EffectiveTheme;

/// Element id of the embedded JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "chat-ui-config";

/// CSS framework whose class vocabulary the page helpers emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// Bootstrap 5 (`text-danger`, `was-validated`).
    Bootstrap,
    /// Tailwind + daisyUI (`text-error`, `input-error`, toasts).
    #[default]
    Daisy,
}

/// How the effective theme is marked on the root element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ThemeMarker {
    /// Attribute whose value is `light` or `dark`.
    Attribute { name: String },
    /// Class present only while the theme is dark.
    Class { name: String },
}

impl Default for ThemeMarker {
    fn default() -> Self {
        Self::Attribute {
            name: "data-theme".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding the preference.
    pub storage_key: String,
    pub marker: ThemeMarker,
    /// Selector of an optional checkbox mirroring the theme.
    pub toggle_selector: Option<String>,
    /// Theme for which the toggle checkbox is checked.
    pub toggle_checked_when: EffectiveTheme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            marker: ThemeMarker::default(),
            toggle_selector: Some(".theme-controller".to_owned()),
            toggle_checked_when: EffectiveTheme::Light,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub selector: String,
    pub dismiss_after_ms: u32,
    pub fade_ms: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            selector: ".alert".to_owned(),
            dismiss_after_ms: 5000,
            fade_ms: 300,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub visible_ms: u32,
    pub fade_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            visible_ms: 3000,
            fade_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub input_id: String,
    pub indicator_id: String,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            input_id: "password".to_owned(),
            indicator_id: "password-strength".to_owned(),
        }
    }
}

/// Top-level configuration for every page helper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub style: StylePreset,
    pub theme: ThemeConfig,
    pub alerts: AlertConfig,
    pub toasts: ToastConfig,
    pub password: PasswordConfig,
}

impl UiConfig {
    /// Parse a JSON configuration document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the embedded configuration block, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}
