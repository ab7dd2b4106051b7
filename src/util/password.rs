//! Password strength scoring and indicator rendering.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use crate::config::StylePreset;

/// Minimum length that earns the length point.
pub const MIN_LENGTH: usize = 8;

/// Count satisfied criteria: length, uppercase, lowercase, digit, symbol.
///
/// Length is measured in UTF-16 code units, as browsers report
/// `input.value.length`, so astral characters count twice. Character
/// classes are ASCII; any non-alphanumeric character, including non-ASCII
/// letters, counts as a symbol.
pub fn score(password: &str) -> u8 {
    let checks = [
        password.encode_utf16().count() >= MIN_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.into_iter().map(u8::from).sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// `None` for a score of zero (nothing typed, or nothing satisfied).
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            1 => Some(Self::VeryWeak),
            2 => Some(Self::Weak),
            3 => Some(Self::Medium),
            4 => Some(Self::Strong),
            5.. => Some(Self::VeryStrong),
            0 => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Color suffix for the preset's `text-*` utility class.
    pub fn color(self, preset: StylePreset) -> &'static str {
        match (self, preset) {
            (Self::VeryWeak, StylePreset::Bootstrap) => "danger",
            (Self::VeryWeak, StylePreset::Daisy) => "error",
            (Self::Weak, _) => "warning",
            (Self::Medium, _) => "info",
            (Self::Strong | Self::VeryStrong, _) => "success",
        }
    }
}

/// Text and class to write into the indicator element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorView {
    pub text: String,
    pub class_name: String,
}

/// Render the indicator for `password` in `preset`'s vocabulary.
pub fn indicator(password: &str, preset: StylePreset) -> IndicatorView {
    let strength = Strength::from_score(score(password));
    let label = strength.map_or("", Strength::label);
    let color = strength.map_or(Strength::VeryWeak.color(preset), |s| s.color(preset));
    match preset {
        StylePreset::Bootstrap => IndicatorView {
            text: label.to_owned(),
            class_name: format!("text-{color}"),
        },
        StylePreset::Daisy => IndicatorView {
            text: format!("Password Strength: {label}"),
            class_name: format!("text-sm text-{color}"),
        },
    }
}

/// Re-render the indicator on every keystroke in the password input.
///
/// No-op when the page has no password input.
#[cfg(feature = "hydrate")]
pub fn attach(config: &crate::config::PasswordConfig, preset: StylePreset) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(input) = doc
        .get_element_by_id(&config.input_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return;
    };

    let indicator_id = config.indicator_id.clone();
    let target = input.clone();
    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&indicator_id))
        else {
            return;
        };
        let view = indicator(&target.value(), preset);
        el.set_text_content(Some(&view.text));
        el.set_class_name(&view.class_name);
    });
    if let Err(e) = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref()) {
        log::warn!("password strength listener rejected: {e:?}");
        return;
    }
    on_input.forget();
}
