//! Transient toast notifications.
//!
//! A toast is a fixed-position daisyUI alert appended to `<body>`, faded out
//! after a delay and then removed. Messages are set as text, never parsed
//! as HTML.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Parse a lowercase kind name as used in `alert-*` classes.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class list of the toast container for `kind`.
pub fn toast_class(kind: ToastKind) -> String {
    format!("alert alert-{kind} fade-in fixed bottom-4 right-4 z-50")
}

/// Fade `el` to transparent after `visible_ms`, then detach it `fade_ms`
/// later. Shared by toasts and server-rendered alerts.
#[cfg(feature = "hydrate")]
pub(crate) fn fade_then_remove(el: web_sys::HtmlElement, visible_ms: u32, fade_ms: u32) {
    use gloo_timers::callback::Timeout;

    Timeout::new(visible_ms, move || {
        if let Err(e) = el.style().set_property("opacity", "0") {
            log::debug!("fade failed: {e:?}");
        }
        Timeout::new(fade_ms, move || el.remove()).forget();
    })
    .forget();
}

/// Show `message` as a toast for the configured duration.
#[cfg(feature = "hydrate")]
pub fn show_toast(message: &str, kind: ToastKind, config: &crate::config::ToastConfig) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = doc.body() else {
        log::warn!("toast dropped: no <body>");
        return;
    };
    let built = (|| {
        let toast = doc.create_element("div")?.dyn_into::<web_sys::HtmlElement>()?;
        toast.set_class_name(&toast_class(kind));
        let span = doc.create_element("span")?;
        span.set_text_content(Some(message));
        toast.append_child(&span)?;
        body.append_child(&toast)?;
        Ok::<_, wasm_bindgen::JsValue>(toast)
    })();
    match built {
        Ok(toast) => fade_then_remove(toast, config.visible_ms, config.fade_ms),
        Err(e) => log::warn!("toast dropped: {e:?}"),
    }
}
