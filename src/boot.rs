//! WASM entry point and JS-callable helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates load the generated module once per page (as a module script,
//! so it runs after parsing). `start` applies the theme first, before any
//! helper wiring, to keep the wrong-theme flash as short as possible.

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{JsError, wasm_bindgen};

use crate::components::theme_toggle::ThemeToggle;
use crate::config::UiConfig;
use crate::theme::browser;
use crate::util::toast::{ToastKind, show_toast};
use crate::util::{alerts, forms, password};

/// Element id the [`ThemeToggle`] component is mounted into, if present.
pub const TOGGLE_MOUNT_ID: &str = "theme-toggle";

thread_local! {
    static CONFIG: RefCell<UiConfig> = RefCell::new(UiConfig::default());
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A logger may already be installed by an embedding page.
    let _ = console_log::init_with_level(level);

    let config = UiConfig::from_document();
    run(&config);
    CONFIG.with(|slot| *slot.borrow_mut() = config);
}

/// Wire every helper for the current page.
pub fn run(config: &UiConfig) {
    let theme = browser::init(&config.theme);
    log::debug!("theme initialized: {theme}");

    mount_toggle(config);

    let scheduled = alerts::schedule_dismissal(&config.alerts);
    if scheduled > 0 {
        log::debug!(
            "{scheduled} alert(s) dismissed after {}ms",
            config.alerts.dismiss_after_ms
        );
    }
    forms::attach(config);
    password::attach(&config.password, config.style);
}

fn mount_toggle(config: &UiConfig) {
    let Some(host) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(TOGGLE_MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let checked_when = config.theme.toggle_checked_when;
    leptos::mount::mount_to(host, move || view! { <ThemeToggle checked_when=checked_when/> }).forget();
}

/// `showToast(message, kind)` for template scripts. Unknown kinds show as info.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast_js(message: &str, kind: Option<String>) {
    let kind = kind.as_deref().map_or(ToastKind::Info, |raw| {
        ToastKind::parse(raw).unwrap_or_else(|| {
            log::warn!("unknown toast kind {raw:?}; using info");
            ToastKind::Info
        })
    });
    let toasts = CONFIG.with(|slot| slot.borrow().toasts);
    show_toast(message, kind, &toasts);
}

/// `toggleTheme()` for template scripts. Returns the new theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme_js() -> String {
    browser::toggle(browser::current()).as_str().to_owned()
}

/// `setThemePreference(value)` for template scripts.
///
/// # Errors
///
/// Throws for values other than `light`, `dark`, or `system`.
#[wasm_bindgen(js_name = setThemePreference)]
pub fn set_theme_preference_js(value: &str) -> Result<String, JsError> {
    browser::set_preference(value)
        .map(|theme| theme.as_str().to_owned())
        .map_err(|e| JsError::new(&e.to_string()))
}
