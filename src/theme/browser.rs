//! Page-level theme entry points.
//!
//! Wires [`ThemeResolver`] to `localStorage`, `matchMedia` and `<html>`
//! and keeps the installed instance for UI controls. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Without the `hydrate` feature every function is a deterministic no-op so
//! native builds and tests never touch browser APIs.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::theme::EffectiveTheme;

#[cfg(feature = "hydrate")]
use crate::theme::document::HtmlDocument;
#[cfg(feature = "hydrate")]
use crate::theme::resolver::{SharedResolver, ThemeResolver, install};
#[cfg(feature = "hydrate")]
use crate::theme::signal::{ManualColorScheme, MediaQuerySource};
#[cfg(feature = "hydrate")]
use crate::theme::store::LocalStorageStore;

#[cfg(feature = "hydrate")]
type PageResolver = SharedResolver<LocalStorageStore, HtmlDocument>;

#[cfg(feature = "hydrate")]
thread_local! {
    static INSTALLED: std::cell::RefCell<Option<PageResolver>> = const { std::cell::RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn with_installed<T>(f: impl FnOnce(&PageResolver) -> T) -> Option<T> {
    INSTALLED.with(|slot| slot.borrow().as_ref().map(f))
}

/// Resolve and apply the page theme, then follow OS changes.
///
/// Call once, as early as possible, to avoid a flash of the wrong theme.
pub fn init(config: &ThemeConfig) -> EffectiveTheme {
    #[cfg(feature = "hydrate")]
    {
        let resolver = ThemeResolver::new(
            LocalStorageStore::new(config.storage_key.clone()),
            HtmlDocument::new(config),
        );
        let shared = match MediaQuerySource::new() {
            Some(source) => install(resolver, &source),
            None => {
                log::warn!("prefers-color-scheme unsupported; assuming light OS theme");
                install(resolver, &ManualColorScheme::new(false))
            }
        };
        let theme = shared.borrow().effective().unwrap_or_default();
        INSTALLED.with(|slot| *slot.borrow_mut() = Some(shared));
        theme
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        EffectiveTheme::default()
    }
}

/// Theme currently applied to the page.
pub fn current() -> EffectiveTheme {
    #[cfg(feature = "hydrate")]
    {
        with_installed(|shared| shared.borrow().effective())
            .flatten()
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        EffectiveTheme::default()
    }
}

/// Flip the theme and persist it as an explicit choice.
///
/// `current` is only consulted when no resolver is installed.
pub fn toggle(current: EffectiveTheme) -> EffectiveTheme {
    #[cfg(feature = "hydrate")]
    {
        with_installed(|shared| shared.borrow_mut().toggle()).unwrap_or_else(|| {
            log::warn!("theme toggled before init");
            current.opposite()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        current.opposite()
    }
}

/// Call `observer` with every theme applied from now on, whatever caused
/// it (OS change, toggle, script call). Returns `false` when no resolver is
/// installed.
pub fn subscribe(observer: impl FnMut(EffectiveTheme) + 'static) -> bool {
    #[cfg(feature = "hydrate")]
    {
        with_installed(|shared| shared.borrow_mut().on_applied(Box::new(observer))).is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = observer;
        false
    }
}

/// Persist a raw `light`/`dark`/`system` value and apply it.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidPreference`] for any other value.
pub fn set_preference(raw: &str) -> Result<EffectiveTheme, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        match with_installed(|shared| shared.borrow_mut().set_preference_str(raw)) {
            Some(result) => result,
            None => raw.parse::<crate::theme::ThemePreference>().map(|_| current()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.parse::<crate::theme::ThemePreference>()?;
        Ok(EffectiveTheme::default())
    }
}
