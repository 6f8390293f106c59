use super::*;

#[test]
fn stage_classes_follow_transition_prefix() {
    assert_eq!(TransitionStage::Enter.class(), "homeTransition-enter");
    assert_eq!(
        TransitionStage::EnterActive.class(),
        "homeTransition-enter homeTransition-enter-active"
    );
    assert_eq!(TransitionStage::EnterDone.class(), "homeTransition-enter-done");
}

#[test]
fn timeout_matches_stylesheet() {
    assert_eq!(TRANSITION_TIMEOUT_MS, 300);
}

// =============================================================
// Mounting
// =============================================================

#[test]
fn unanimated_mount_starts_visible() {
    assert_eq!(TransitionStage::initial(false), TransitionStage::EnterDone);
    assert_eq!(TransitionStage::initial(false).class(), "homeTransition-enter-done");
}

#[test]
fn animated_mount_starts_at_enter() {
    assert_eq!(TransitionStage::initial(true), TransitionStage::Enter);
}

#[test]
fn only_later_mounts_in_a_group_animate() {
    let mut group = TransitionGroupState::default();
    assert!(!group.mount());
    assert!(group.mount());
    assert!(group.mount());
}
