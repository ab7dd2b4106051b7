use super::*;

#[test]
fn invalid_field_gets_error_styling() {
    let feedback = FieldFeedback::for_validity(false);
    assert!(feedback.input_error);
    assert_eq!(feedback.label_add, "text-error");
    assert_eq!(feedback.label_remove, "text-info");
}

#[test]
fn valid_field_restores_info_styling() {
    let feedback = FieldFeedback::for_validity(true);
    assert!(!feedback.input_error);
    assert_eq!(feedback.label_add, "text-info");
    assert_eq!(feedback.label_remove, "text-error");
}

#[test]
fn daisy_blocks_and_toasts_invalid_submit() {
    assert_eq!(
        on_submit(false, StylePreset::Daisy),
        SubmitOutcome {
            block: true,
            toast_first_error: true,
            mark_validated: false,
        }
    );
}

#[test]
fn valid_submit_passes_through() {
    let outcome = on_submit(true, StylePreset::Daisy);
    assert!(!outcome.block);
    assert!(!outcome.toast_first_error);
}

#[test]
fn bootstrap_marks_validated_on_every_submit() {
    assert!(on_submit(true, StylePreset::Bootstrap).mark_validated);
    let invalid = on_submit(false, StylePreset::Bootstrap);
    assert!(invalid.mark_validated);
    assert!(invalid.block);
    assert!(!invalid.toast_first_error);
}

#[test]
fn only_daisy_styles_on_blur() {
    assert!(styles_on_blur(StylePreset::Daisy));
    assert!(!styles_on_blur(StylePreset::Bootstrap));
}

#[test]
fn textarea_and_select_report_validation_messages() {
    assert!(reports_validation_message("INPUT"));
    assert!(reports_validation_message("TEXTAREA"));
    assert!(reports_validation_message("select"));
}

#[test]
fn containers_do_not_report_validation_messages() {
    assert!(!reports_validation_message("FIELDSET"));
    assert!(!reports_validation_message("FORM"));
    assert!(!reports_validation_message("DIV"));
}

#[test]
fn invalid_selector_covers_every_message_control() {
    for tag in ["input", "textarea", "select"] {
        assert!(INVALID_CONTROL_SELECTOR.contains(&format!("{tag}:invalid")));
    }
    assert!(!INVALID_CONTROL_SELECTOR.contains("fieldset"));
}
