//! Checkbox control flipping between light and dark.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::theme::{EffectiveTheme, browser};

/// Hover text describing what a click will do.
pub fn toggle_title(current: EffectiveTheme) -> String {
    format!("Switch to {} theme", current.opposite())
}

/// Theme toggle rendered as a daisyUI `theme-controller` checkbox.
///
/// Each change stores the opposite of the current theme as an explicit
/// preference, after which OS changes no longer affect the page. The
/// control tracks every applied theme, whatever triggered it.
#[component]
pub fn ThemeToggle(
    /// Theme for which the checkbox shows as checked.
    #[prop(default = EffectiveTheme::Light)]
    checked_when: EffectiveTheme,
) -> impl IntoView {
    let theme = RwSignal::new(browser::current());
    // Follow OS changes and script-driven updates, not just our own clicks.
    browser::subscribe(move |applied| {
        let _ = theme.try_set(applied);
    });

    let on_change = move |_| {
        let next = browser::toggle(theme.get_untracked());
        theme.set(next);
    };

    let checked = move || theme.get() == checked_when;
    let title = move || toggle_title(theme.get());

    view! {
        <label class="swap swap-rotate theme-toggle" title=title>
            <input type="checkbox" class="theme-controller" prop:checked=checked on:change=on_change/>
            <span class="theme-toggle__label">{move || theme.get().as_str()}</span>
        </label>
    }
}
