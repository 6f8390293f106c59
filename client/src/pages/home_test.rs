use super::*;

#[test]
fn enable_button_has_no_title_while_channel_is_available() {
    assert_eq!(enable_button_title(true), None);
}

#[test]
fn disabled_enable_button_explains_why() {
    let title = enable_button_title(false).unwrap();
    assert!(title.contains("unable to connect to the WebChannel"));
}

#[test]
fn recording_shortcuts_cover_start_stop_and_capture() {
    let digits: Vec<&str> = RECORDING_SHORTCUTS.iter().map(|(digit, _)| *digit).collect();
    assert_eq!(digits, vec!["1", "2"]);
    for (_, label) in RECORDING_SHORTCUTS {
        assert_ne!(message(label), label, "shortcut label {label} missing from catalog");
    }
}

// =============================================================
// Panel selection
// =============================================================

#[test]
fn every_phase_selects_a_distinct_panel_test_id() {
    let cases = [
        (PopupInstallPhase::CheckingWebChannel, "home-enable-popup-instructions"),
        (PopupInstallPhase::SuggestEnablePopup, "home-enable-popup-instructions"),
        (PopupInstallPhase::WebChannelUnavailable, "home-enable-popup-instructions"),
        (PopupInstallPhase::PopupEnabled, "home-record-instructions"),
        (PopupInstallPhase::OtherBrowser, "home-other-browser-instructions"),
    ];
    for (phase, test_id) in cases {
        assert_eq!(phase.instructions().test_id(), test_id, "phase {}", phase.as_str());
    }
}

// =============================================================
// Enable request results
// =============================================================

#[test]
fn enable_success_shows_record_instructions() {
    let owner = Owner::new();
    owner.with(|| {
        let phase = RwSignal::new(PopupInstallPhase::SuggestEnablePopup);
        assert!(apply_enable_result(phase, Ok(())));
        assert_eq!(phase.get_untracked(), PopupInstallPhase::PopupEnabled);
    });
}

#[test]
fn enable_failure_keeps_current_phase() {
    let owner = Owner::new();
    owner.with(|| {
        let phase = RwSignal::new(PopupInstallPhase::SuggestEnablePopup);
        assert!(apply_enable_result(phase, Err(ChannelError::Rejected("denied".into()))));
        assert_eq!(phase.get_untracked(), PopupInstallPhase::SuggestEnablePopup);
    });
}

#[test]
fn enable_reply_after_page_closed_is_dropped() {
    let owner = Owner::new();
    let phase = owner.with(|| RwSignal::new(PopupInstallPhase::SuggestEnablePopup));
    owner.cleanup();

    assert!(!apply_enable_result(phase, Ok(())));
    assert!(!apply_enable_result(phase, Err(ChannelError::Rejected("denied".into()))));
}
