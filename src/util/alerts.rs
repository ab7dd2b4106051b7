//! Auto-dismissal of server-rendered flash alerts.

#[cfg(feature = "hydrate")]
use crate::config::AlertConfig;

/// Schedule every alert present on the page for dismissal.
///
/// Returns the number of alerts scheduled.
#[cfg(feature = "hydrate")]
pub fn schedule_dismissal(config: &AlertConfig) -> u32 {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(alerts) = doc.query_selector_all(&config.selector) else {
        log::warn!("invalid alert selector {:?}", config.selector);
        return 0;
    };
    let mut scheduled = 0;
    for alert in (0..alerts.length())
        .filter_map(|i| alerts.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
    {
        crate::util::toast::fade_then_remove(alert, config.dismiss_after_ms, config.fade_ms);
        scheduled += 1;
    }
    scheduled
}
