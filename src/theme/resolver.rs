//! Theme resolver: preference + OS signal → applied theme.
//!
//! DESIGN
//! ======
//! The resolver owns the injected store and document and caches only the
//! last OS signal and the last applied theme. Every step re-derives the
//! effective theme from scratch, so the document marker always equals the
//! most recent resolution.
//!
//! ERROR HANDLING
//! ==============
//! Store failures downgrade the preference to session memory; document
//! failures are logged. Neither reaches the caller. Only malformed input to
//! [`ThemeResolver::set_preference_str`] is rejected.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::ThemeError;
use crate::theme::document::ThemeDocument;
use crate::theme::signal::ColorSchemeSource;
use crate::theme::store::PreferenceStore;
use crate::theme::{EffectiveTheme, ThemePreference, resolve_effective};

/// Resolver shared between page code and the OS change listener.
pub type SharedResolver<S, D> = Rc<RefCell<ThemeResolver<S, D>>>;

/// Callback told about every applied theme.
///
/// Runs while the resolver is mutably borrowed; it must not call back into
/// the resolver.
pub type AppliedObserver = Box<dyn FnMut(EffectiveTheme)>;

pub struct ThemeResolver<S, D> {
    store: S,
    document: D,
    /// Preference kept in memory after the store refused a write.
    session: Option<ThemePreference>,
    os_is_dark: bool,
    effective: Option<EffectiveTheme>,
    observers: Vec<AppliedObserver>,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeResolver<S, D> {
    pub fn new(store: S, document: D) -> Self {
        Self {
            store,
            document,
            session: None,
            os_is_dark: false,
            effective: None,
            observers: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Last applied theme; `None` before [`Self::initialize`].
    pub fn effective(&self) -> Option<EffectiveTheme> {
        self.effective
    }

    /// Last OS signal seen by the resolver.
    pub fn os_is_dark(&self) -> bool {
        self.os_is_dark
    }

    /// Notify `observer` after each apply, including repeats of the same
    /// theme and OS-driven changes.
    pub fn on_applied(&mut self, observer: AppliedObserver) {
        self.observers.push(observer);
    }

    /// Current preference. Absent or unreadable values mean `system`.
    pub fn preference(&self) -> ThemePreference {
        if let Some(pref) = self.session {
            return pref;
        }
        match self.store.load() {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: ThemeError| {
                log::warn!("{e}; treating as system");
                ThemePreference::System
            }),
            Ok(None) => ThemePreference::System,
            Err(e) => {
                log::warn!("{e}; using system preference");
                ThemePreference::System
            }
        }
    }

    /// Persist `preference`, then resolve and apply it.
    pub fn set_preference(&mut self, preference: ThemePreference) -> EffectiveTheme {
        match self.store.save(preference.as_str()) {
            Ok(()) => self.session = None,
            Err(e) => {
                log::warn!("{e}; keeping {preference} for this session");
                self.session = Some(preference);
            }
        }
        self.refresh()
    }

    /// Parse and persist a raw preference value, e.g. from a form control.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidPreference`] for anything other than
    /// `light`, `dark`, or `system`; nothing is stored or applied.
    pub fn set_preference_str(&mut self, raw: &str) -> Result<EffectiveTheme, ThemeError> {
        let preference = raw.parse()?;
        Ok(self.set_preference(preference))
    }

    /// Write `theme` to the document and remember it.
    pub fn apply_effective(&mut self, theme: EffectiveTheme) {
        if let Err(e) = self.document.apply(theme) {
            log::warn!("theme {theme} not applied: {e}");
        }
        if self.effective != Some(theme) {
            log::debug!("effective theme -> {theme}");
        }
        self.effective = Some(theme);
        for observer in &mut self.observers {
            observer(theme);
        }
    }

    /// Page-load step: record the OS signal, resolve, apply.
    pub fn initialize(&mut self, os_is_dark: bool) -> EffectiveTheme {
        self.os_is_dark = os_is_dark;
        self.refresh()
    }

    /// React to an OS scheme change. Re-applies only while the preference
    /// is `system`; returns the new theme in that case.
    pub fn handle_os_change(&mut self, os_is_dark: bool) -> Option<EffectiveTheme> {
        self.os_is_dark = os_is_dark;
        if self.preference() == ThemePreference::System {
            Some(self.refresh())
        } else {
            None
        }
    }

    /// Store the opposite of the current theme as an explicit choice.
    pub fn toggle(&mut self) -> EffectiveTheme {
        let current = self
            .effective
            .unwrap_or_else(|| resolve_effective(self.preference(), self.os_is_dark));
        self.set_preference(current.opposite().into())
    }

    fn refresh(&mut self) -> EffectiveTheme {
        let theme = resolve_effective(self.preference(), self.os_is_dark);
        self.apply_effective(theme);
        theme
    }
}

/// Register `shared` for OS scheme changes from `source`.
///
/// The listener holds a weak reference; once the resolver is dropped,
/// further events are ignored.
///
/// # Errors
///
/// Propagates the source's subscription failure.
pub fn on_os_theme_change<S, D, O>(shared: &SharedResolver<S, D>, source: &O) -> Result<(), ThemeError>
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
    O: ColorSchemeSource + ?Sized,
{
    let weak: Weak<RefCell<ThemeResolver<S, D>>> = Rc::downgrade(shared);
    source.subscribe(Box::new(move |os_is_dark| {
        let Some(resolver) = weak.upgrade() else {
            return;
        };
        match resolver.try_borrow_mut() {
            Ok(mut resolver) => {
                resolver.handle_os_change(os_is_dark);
            }
            Err(_) => log::warn!("resolver busy; dropped OS scheme change"),
        }
    }))
}

/// Initialize `resolver` from `source` and follow its changes.
///
/// Subscription failure is logged; the initial theme is still applied.
pub fn install<S, D, O>(resolver: ThemeResolver<S, D>, source: &O) -> SharedResolver<S, D>
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
    O: ColorSchemeSource + ?Sized,
{
    let shared = Rc::new(RefCell::new(resolver));
    shared.borrow_mut().initialize(source.prefers_dark());
    if let Err(e) = on_os_theme_change(&shared, source) {
        log::warn!("OS theme changes will not be followed: {e}");
    }
    shared
}
