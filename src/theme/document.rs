//! Document seam: where the effective theme becomes visible.
//!
//! The root marker and the optional toggle control are render targets this
//! crate writes but does not own. Both writes are absolute (set attribute,
//! force class, set checked) so applying the same theme twice is a no-op.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{ThemeConfig, ThemeMarker};
use crate::error::ThemeError;
use crate::theme::EffectiveTheme;

/// Render target for the effective theme.
pub trait ThemeDocument {
    /// Mark the root element and sync the toggle control.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingDomTarget`] when the root element is
    /// absent. A missing toggle control is not an error.
    fn apply(&mut self, theme: EffectiveTheme) -> Result<(), ThemeError>;
}

/// A single write to the root element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerUpdate<'a> {
    SetAttribute { name: &'a str, value: &'static str },
    /// Add the class when `present`, remove it otherwise.
    ForceClass { name: &'a str, present: bool },
}

/// Translate a theme into the root-element write for `marker`.
#[must_use]
pub fn marker_update(marker: &ThemeMarker, theme: EffectiveTheme) -> MarkerUpdate<'_> {
    match marker {
        ThemeMarker::Attribute { name } => MarkerUpdate::SetAttribute {
            name: name.as_str(),
            value: theme.as_str(),
        },
        ThemeMarker::Class { name } => MarkerUpdate::ForceClass {
            name: name.as_str(),
            present: theme.is_dark(),
        },
    }
}

/// Checked state of the toggle control for `theme`.
#[must_use]
pub fn toggle_checked(theme: EffectiveTheme, checked_when: EffectiveTheme) -> bool {
    theme == checked_when
}

/// In-memory model of the root element and toggle control.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    marker: ThemeMarker,
    checked_when: EffectiveTheme,
    has_root: bool,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    /// `None` when the page has no toggle control.
    pub toggle_checked: Option<bool>,
}

impl MemoryDocument {
    /// Document with a root element and, if `config.toggle_selector` is set,
    /// an unchecked toggle control.
    #[must_use]
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            marker: config.marker.clone(),
            checked_when: config.toggle_checked_when,
            has_root: true,
            attributes: BTreeMap::new(),
            classes: BTreeSet::new(),
            toggle_checked: config.toggle_selector.as_ref().map(|_| false),
        }
    }

    /// Document with neither root element nor toggle control.
    #[must_use]
    pub fn detached(config: &ThemeConfig) -> Self {
        Self {
            has_root: false,
            toggle_checked: None,
            ..Self::new(config)
        }
    }

    /// Theme as currently read back from the root marker.
    #[must_use]
    pub fn rendered(&self) -> Option<EffectiveTheme> {
        match &self.marker {
            ThemeMarker::Attribute { name } => match self.attributes.get(name)?.as_str() {
                "dark" => Some(EffectiveTheme::Dark),
                "light" => Some(EffectiveTheme::Light),
                _ => None,
            },
            ThemeMarker::Class { name } if self.classes.contains(name) => Some(EffectiveTheme::Dark),
            ThemeMarker::Class { .. } => Some(EffectiveTheme::Light),
        }
    }
}

impl ThemeDocument for MemoryDocument {
    fn apply(&mut self, theme: EffectiveTheme) -> Result<(), ThemeError> {
        if !self.has_root {
            return Err(ThemeError::MissingDomTarget("document element"));
        }
        match marker_update(&self.marker, theme) {
            MarkerUpdate::SetAttribute { name, value } => {
                self.attributes.insert(name.to_owned(), value.to_owned());
            }
            MarkerUpdate::ForceClass { name, present } => {
                if present {
                    self.classes.insert(name.to_owned());
                } else {
                    self.classes.remove(name);
                }
            }
        }
        if let Some(checked) = self.toggle_checked.as_mut() {
            *checked = toggle_checked(theme, self.checked_when);
        }
        Ok(())
    }
}

/// The live `<html>` element plus every matching toggle control.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct HtmlDocument {
    marker: ThemeMarker,
    toggle_selector: Option<String>,
    checked_when: EffectiveTheme,
}

#[cfg(feature = "hydrate")]
impl HtmlDocument {
    #[must_use]
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            marker: config.marker.clone(),
            toggle_selector: config.toggle_selector.clone(),
            checked_when: config.toggle_checked_when,
        }
    }

    fn sync_toggle(&self, doc: &web_sys::Document, theme: EffectiveTheme) {
        use wasm_bindgen::JsCast;

        let Some(selector) = self.toggle_selector.as_deref() else {
            return;
        };
        let Ok(matches) = doc.query_selector_all(selector) else {
            log::warn!("invalid theme toggle selector {selector:?}");
            return;
        };
        let checked = toggle_checked(theme, self.checked_when);
        let mut synced = 0;
        for input in (0..matches.length())
            .filter_map(|i| matches.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_checked(checked);
            synced += 1;
        }
        if synced == 0 {
            log::trace!("no theme toggle matches {selector}");
        }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeDocument for HtmlDocument {
    fn apply(&mut self, theme: EffectiveTheme) -> Result<(), ThemeError> {
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ThemeError::MissingDomTarget("document"))?;
        let root = doc
            .document_element()
            .ok_or(ThemeError::MissingDomTarget("document element"))?;

        // Marker write failures only happen for malformed names from config.
        match marker_update(&self.marker, theme) {
            MarkerUpdate::SetAttribute { name, value } => {
                if let Err(e) = root.set_attribute(name, value) {
                    log::warn!("failed to set {name}={value}: {e:?}");
                }
            }
            MarkerUpdate::ForceClass { name, present } => {
                if let Err(e) = root.class_list().toggle_with_force(name, present) {
                    log::warn!("failed to toggle class {name}: {e:?}");
                }
            }
        }
        self.sync_toggle(&doc, theme);
        Ok(())
    }
}
