use super::*;

fn profile(token: &str, published_at_ms: u64) -> PublishedProfile {
    PublishedProfile {
        profile_token: token.to_owned(),
        name: format!("Profile {token}"),
        url: format!("https://share.example/public/{token}"),
        published_at_ms,
    }
}

#[test]
fn published_state_defaults() {
    let state = PublishedProfilesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loaded);
}

#[test]
fn from_items_sorts_newest_first() {
    let state = PublishedProfilesState::from_items(vec![profile("a", 1), profile("b", 3), profile("c", 2)]);
    let tokens: Vec<&str> = state.items.iter().map(|p| p.profile_token.as_str()).collect();
    assert_eq!(tokens, ["b", "c", "a"]);
    assert!(state.loaded);
}

#[test]
fn visible_is_capped_by_limit() {
    let state = PublishedProfilesState::from_items((0..5).map(|i| profile(&i.to_string(), i)).collect());
    assert_eq!(state.visible(3).len(), 3);
    assert_eq!(state.visible(3)[0].profile_token, "4");
    assert_eq!(state.remaining(3), 2);
}

#[test]
fn visible_with_short_list() {
    let state = PublishedProfilesState::from_items(vec![profile("a", 1)]);
    assert_eq!(state.visible(3).len(), 1);
    assert_eq!(state.remaining(3), 0);
    assert_eq!(state.visible(usize::MAX).len(), 1);
}

#[test]
fn remove_drops_matching_token() {
    let mut state = PublishedProfilesState::from_items(vec![profile("a", 1), profile("b", 2)]);
    state.remove("a");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].profile_token, "b");
    state.remove("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn age_label_buckets() {
    let now = 10 * 24 * 3_600_000;
    assert_eq!(age_label(now, now - 5_000), "just now");
    assert_eq!(age_label(now, now - 60_000), "1 minute ago");
    assert_eq!(age_label(now, now - 5 * 60_000), "5 minutes ago");
    assert_eq!(age_label(now, now - 3 * 3_600_000), "3 hours ago");
    assert_eq!(age_label(now, now - 2 * 24 * 3_600_000), "2 days ago");
}

#[test]
fn age_label_clamps_future_timestamps() {
    assert_eq!(age_label(1_000, 5_000), "just now");
}

#[test]
fn published_profile_uses_camel_case_json() {
    let json = serde_json::to_value(profile("tok", 7)).unwrap_or_default();
    assert_eq!(json["profileToken"], "tok");
    assert_eq!(json["publishedAtMs"], 7);
}
