//! OS color-scheme seam: "is dark preferred?" plus change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ThemeError;

/// Callback receiving the new "prefers dark" state.
pub type ColorSchemeListener = Box<dyn FnMut(bool)>;

/// Media query evaluated by the browser source.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Query-and-subscribe access to the OS preferred color scheme.
pub trait ColorSchemeSource {
    /// Whether the OS currently prefers a dark scheme.
    fn prefers_dark(&self) -> bool;

    /// Register `listener` for every subsequent change, in delivery order.
    /// Subscriptions live for the rest of the page.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingDomTarget`] when the platform offers no
    /// change notifications.
    fn subscribe(&self, listener: ColorSchemeListener) -> Result<(), ThemeError>;
}

#[derive(Default)]
struct ManualState {
    dark: bool,
    listeners: Vec<ColorSchemeListener>,
}

/// Color scheme driven by hand. Clones share state.
///
/// Stands in for the OS where no browser is present.
#[derive(Clone, Default)]
pub struct ManualColorScheme {
    inner: Rc<RefCell<ManualState>>,
}

impl ManualColorScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        let scheme = Self::default();
        scheme.inner.borrow_mut().dark = dark;
        scheme
    }

    /// Change the scheme and notify every listener.
    ///
    /// Listeners must not subscribe from inside their callback.
    pub fn set_dark(&self, dark: bool) {
        let mut listeners = {
            let mut state = self.inner.borrow_mut();
            state.dark = dark;
            std::mem::take(&mut state.listeners)
        };
        for listener in &mut listeners {
            listener(dark);
        }
        self.inner.borrow_mut().listeners = listeners;
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn prefers_dark(&self) -> bool {
        self.inner.borrow().dark
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> Result<(), ThemeError> {
        self.inner.borrow_mut().listeners.push(listener);
        Ok(())
    }
}

/// `window.matchMedia('(prefers-color-scheme: dark)')`.
#[cfg(feature = "hydrate")]
pub struct MediaQuerySource {
    query: web_sys::MediaQueryList,
}

#[cfg(feature = "hydrate")]
impl MediaQuerySource {
    /// `None` when there is no window or the query is unsupported.
    #[must_use]
    pub fn new() -> Option<Self> {
        let query = web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
        Some(Self { query })
    }
}

#[cfg(feature = "hydrate")]
impl ColorSchemeSource for MediaQuerySource {
    fn prefers_dark(&self) -> bool {
        self.query.matches()
    }

    fn subscribe(&self, mut listener: ColorSchemeListener) -> Result<(), ThemeError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
        );
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        self.query
            .add_event_listener_with_callback("change", callback)
            .map_err(|e| {
                log::warn!("matchMedia change listener rejected: {e:?}");
                ThemeError::MissingDomTarget("color scheme change events")
            })?;
        closure.forget();
        Ok(())
    }
}
