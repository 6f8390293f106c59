use super::*;

#[test]
fn profile_load_state_defaults() {
    let state = ProfileLoadState::default();
    assert_eq!(state.data_source, DataSource::None);
    assert_eq!(state.request_seq, 0);
    assert!(state.pending_navigation.is_none());
}

#[test]
fn request_records_source_and_route() {
    let mut state = ProfileLoadState::default();
    state.request(
        DataSource::FromUrl {
            url: "https://example.com/p.json".into(),
        },
        "/from-url?url=x".into(),
    );
    assert_eq!(
        state.data_source,
        DataSource::FromUrl {
            url: "https://example.com/p.json".into()
        }
    );
    assert_eq!(state.request_seq, 1);
    assert_eq!(state.pending_navigation.as_deref(), Some("/from-url?url=x"));
}

#[test]
fn repeated_requests_bump_sequence() {
    let mut state = ProfileLoadState::default();
    let source = DataSource::FromFile {
        name: "a.json".into(),
        size_bytes: 10,
    };
    state.request(source.clone(), "/from-file".into());
    state.request(source, "/from-file".into());
    assert_eq!(state.request_seq, 2);
}

#[test]
fn take_navigation_consumes_route() {
    let mut state = ProfileLoadState::default();
    state.request(DataSource::None, "/somewhere".into());
    assert_eq!(state.take_navigation().as_deref(), Some("/somewhere"));
    assert_eq!(state.take_navigation(), None);
}
