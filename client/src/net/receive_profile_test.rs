use super::*;

#[test]
fn from_url_route_form_encodes_url() {
    assert_eq!(
        from_url_route("https://example.com/a b.json?x=1&y=2"),
        "/from-url?url=https%3A%2F%2Fexample.com%2Fa+b.json%3Fx%3D1%26y%3D2"
    );
}

#[test]
fn from_url_route_round_trips_through_query_parsing() {
    let url = "https://storage.example/profile.json.gz?token=abc&v=2";
    let route = from_url_route(url);
    let query = route.trim_start_matches("/from-url?");
    let parsed: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes()).into_owned().collect();
    assert_eq!(parsed, vec![("url".to_owned(), url.to_owned())]);
}

#[test]
fn retrieve_profile_from_file_records_file_source() {
    let mut state = ProfileLoadState::default();
    let mut slot = None;
    retrieve_profile_from_file(&mut state, &mut slot, SelectedFile::new("perf.json", 2048));
    assert_eq!(
        state.data_source,
        DataSource::FromFile {
            name: "perf.json".into(),
            size_bytes: 2048,
        }
    );
    assert_eq!(state.request_seq, 1);
    assert_eq!(state.pending_navigation.as_deref(), Some(FROM_FILE_ROUTE));
    assert_eq!(slot, Some(SelectedFile::new("perf.json", 2048)));
}

#[test]
fn trigger_loading_from_url_keeps_exact_string() {
    let mut state = ProfileLoadState::default();
    let mut slot = None;
    trigger_loading_from_url(&mut state, &mut slot, "  https://example.com/p.json".into());
    assert_eq!(
        state.data_source,
        DataSource::FromUrl {
            url: "  https://example.com/p.json".into()
        }
    );
    assert_eq!(
        state.pending_navigation,
        Some(from_url_route("  https://example.com/p.json"))
    );
}

#[test]
fn loading_from_url_releases_picked_file() {
    let mut state = ProfileLoadState::default();
    let mut slot = None;
    retrieve_profile_from_file(&mut state, &mut slot, SelectedFile::new("perf.json", 2048));
    trigger_loading_from_url(&mut state, &mut slot, "https://example.com/p.json".into());
    assert_eq!(slot, None);
    assert_eq!(state.request_seq, 2);
}

// =============================================================
// Pending route
// =============================================================

#[test]
fn pending_route_is_taken_once() {
    let owner = Owner::new();
    owner.with(|| {
        let profile_load = RwSignal::new(ProfileLoadState::default());
        let mut slot = None;
        profile_load.update(|state| trigger_loading_from_url(state, &mut slot, "https://example.com/p.json".into()));
        assert_eq!(
            take_pending_route(profile_load),
            Some(from_url_route("https://example.com/p.json"))
        );
        assert_eq!(take_pending_route(profile_load), None);
    });
}

#[test]
fn route_queued_by_unmounted_page_is_still_followed() {
    let app = Owner::new();
    app.with(|| {
        let profile_load = RwSignal::new(ProfileLoadState::default());
        let page = app.child();
        page.with(|| {
            let mut slot = None;
            profile_load.update(|state| retrieve_profile_from_file(state, &mut slot, SelectedFile::new("a.json", 1)));
        });
        page.cleanup();
        assert_eq!(take_pending_route(profile_load).as_deref(), Some(FROM_FILE_ROUTE));
    });
}

#[test]
fn no_route_without_a_load_action() {
    let owner = Owner::new();
    owner.with(|| {
        let profile_load = RwSignal::new(ProfileLoadState::default());
        assert_eq!(take_pending_route(profile_load), None);
    });
}
