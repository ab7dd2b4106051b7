//! Form validation feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms are server-rendered with HTML constraint attributes. This module
//! only blocks invalid submits and styles fields; the browser's own
//! validity state is the source of truth.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::config::StylePreset;

/// Class added to a form on submit so Bootstrap reveals feedback.
pub const BOOTSTRAP_VALIDATED_CLASS: &str = "was-validated";

/// Class changes for an input and its helper label after blur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldFeedback {
    /// Whether the input carries `input-error`.
    pub input_error: bool,
    pub label_add: &'static str,
    pub label_remove: &'static str,
}

impl FieldFeedback {
    pub fn for_validity(valid: bool) -> Self {
        if valid {
            Self {
                input_error: false,
                label_add: "text-info",
                label_remove: "text-error",
            }
        } else {
            Self {
                input_error: true,
                label_add: "text-error",
                label_remove: "text-info",
            }
        }
    }
}

/// What a submit handler should do for a form in the given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Cancel the submit and stop propagation.
    pub block: bool,
    /// Toast the first invalid field's message.
    pub toast_first_error: bool,
    pub mark_validated: bool,
}

pub fn on_submit(valid: bool, preset: StylePreset) -> SubmitOutcome {
    SubmitOutcome {
        block: !valid,
        toast_first_error: !valid && preset == StylePreset::Daisy,
        mark_validated: preset == StylePreset::Bootstrap,
    }
}

/// Controls whose invalid state produces the submit toast. `:invalid` alone
/// would also match `<form>` and `<fieldset>`, which carry no message.
pub const INVALID_CONTROL_SELECTOR: &str = "input:invalid, textarea:invalid, select:invalid";

/// Whether an element with `tag_name` reports its own validation message.
pub fn reports_validation_message(tag_name: &str) -> bool {
    ["INPUT", "TEXTAREA", "SELECT"]
        .iter()
        .any(|tag| tag_name.eq_ignore_ascii_case(tag))
}

/// Whether inputs get live feedback on blur.
pub fn styles_on_blur(preset: StylePreset) -> bool {
    preset == StylePreset::Daisy
}

#[cfg(feature = "hydrate")]
mod dom {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, HtmlFormElement, HtmlInputElement};

    use super::{
        BOOTSTRAP_VALIDATED_CLASS, FieldFeedback, INVALID_CONTROL_SELECTOR, on_submit,
        reports_validation_message, styles_on_blur,
    };
    use crate::config::UiConfig;
    use crate::util::toast::{ToastKind, show_toast};

    fn elements(root: &web_sys::Document, selector: &str) -> Vec<Element> {
        let Ok(list) = root.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn first_invalid_message(form: &HtmlFormElement) -> Option<String> {
        let el = form.query_selector(INVALID_CONTROL_SELECTOR).ok().flatten()?;
        if !reports_validation_message(&el.tag_name()) {
            return None;
        }
        js_sys::Reflect::get(&el, &"validationMessage".into())
            .ok()?
            .as_string()
            .filter(|m| !m.is_empty())
    }

    fn attach_submit(form: &HtmlFormElement, config: &UiConfig) {
        let target = form.clone();
        let preset = config.style;
        let toasts = config.toasts;
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let outcome = on_submit(target.check_validity(), preset);
            if outcome.block {
                event.prevent_default();
                event.stop_propagation();
            }
            if outcome.toast_first_error {
                if let Some(message) = first_invalid_message(&target) {
                    show_toast(&message, ToastKind::Error, &toasts);
                }
            }
            if outcome.mark_validated {
                let _ = target.class_list().add_1(BOOTSTRAP_VALIDATED_CLASS);
            }
        });
        if form
            .add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            handler.forget();
        }
    }

    fn apply_feedback(input: &HtmlInputElement) {
        let feedback = FieldFeedback::for_validity(input.check_validity());
        let _ = input
            .class_list()
            .toggle_with_force("input-error", feedback.input_error);
        let label = input
            .closest(".form-control")
            .ok()
            .flatten()
            .and_then(|control| control.query_selector(".label-text-alt").ok().flatten());
        if let Some(label) = label {
            let classes = label.class_list();
            let _ = classes.remove_1(feedback.label_remove);
            let _ = classes.add_1(feedback.label_add);
        }
    }

    fn attach_blur(form: &HtmlFormElement) {
        let Ok(inputs) = form.query_selector_all("input") else {
            return;
        };
        for input in (0..inputs.length())
            .filter_map(|i| inputs.item(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        {
            let target = input.clone();
            let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                apply_feedback(&target);
            });
            if input
                .add_event_listener_with_callback("blur", handler.as_ref().unchecked_ref())
                .is_ok()
            {
                handler.forget();
            }
        }
    }

    /// Attach submit (and, for daisyUI, blur) handlers to every form.
    pub fn attach(config: &UiConfig) {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let forms: Vec<HtmlFormElement> = elements(&doc, "form")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
            .collect();
        log::debug!("validating {} form(s)", forms.len());
        for form in &forms {
            attach_submit(form, config);
            if styles_on_blur(config.style) {
                attach_blur(form);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub use dom::attach;
