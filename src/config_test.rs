use super::*;

#[test]
fn defaults_match_daisy_pages() {
    let config = UiConfig::default();
    assert_eq!(config.style, StylePreset::Daisy);
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(
        config.theme.marker,
        ThemeMarker::Attribute {
            name: "data-theme".to_owned()
        }
    );
    assert_eq!(config.theme.toggle_selector.as_deref(), Some(".theme-controller"));
    assert_eq!(config.theme.toggle_checked_when, EffectiveTheme::Light);
    assert_eq!(config.alerts.selector, ".alert");
    assert_eq!(config.alerts.dismiss_after_ms, 5000);
    assert_eq!(config.alerts.fade_ms, 300);
    assert_eq!(config.toasts.visible_ms, 3000);
    assert_eq!(config.password.input_id, "password");
    assert_eq!(config.password.indicator_id, "password-strength");
}

#[test]
fn empty_object_yields_defaults() {
    let config = UiConfig::from_json("{}").unwrap();
    assert_eq!(config, UiConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = UiConfig::from_json(
        r#"{
            "style": "bootstrap",
            "theme": { "marker": { "kind": "class", "name": "dark" }, "toggle_selector": null },
            "alerts": { "dismiss_after_ms": 1000 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.style, StylePreset::Bootstrap);
    assert_eq!(
        config.theme.marker,
        ThemeMarker::Class {
            name: "dark".to_owned()
        }
    );
    assert_eq!(config.theme.toggle_selector, None);
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.alerts.dismiss_after_ms, 1000);
    assert_eq!(config.alerts.fade_ms, 300);
}

#[test]
fn toggle_checked_when_parses_lowercase_theme() {
    let config = UiConfig::from_json(r#"{ "theme": { "toggle_checked_when": "dark" } }"#).unwrap();
    assert_eq!(config.theme.toggle_checked_when, EffectiveTheme::Dark);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = UiConfig::from_json("{ style: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_style_is_rejected() {
    assert!(UiConfig::from_json(r#"{ "style": "bulma" }"#).is_err());
}
