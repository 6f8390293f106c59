use super::*;

// =============================================================
// Source resolution
// =============================================================

#[test]
fn dispatched_source_wins_over_query() {
    let dispatched = DataSource::FromFile {
        name: "a.json".to_owned(),
        size_bytes: 10,
    };
    assert_eq!(
        resolve_data_source(dispatched.clone(), Some("https://example.com/p.json".to_owned())),
        dispatched
    );
}

#[test]
fn query_url_is_used_when_nothing_was_dispatched() {
    assert_eq!(
        resolve_data_source(DataSource::None, Some("https://example.com/p.json".to_owned())),
        DataSource::FromUrl {
            url: "https://example.com/p.json".to_owned()
        }
    );
}

#[test]
fn empty_query_url_is_ignored() {
    assert_eq!(resolve_data_source(DataSource::None, Some(String::new())), DataSource::None);
    assert_eq!(resolve_data_source(DataSource::None, None), DataSource::None);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn no_source_has_no_loading_message() {
    assert_eq!(loading_message(&DataSource::None), None);
}

#[test]
fn file_message_names_file_and_size() {
    let text = loading_message(&DataSource::FromFile {
        name: "trace.json".to_owned(),
        size_bytes: 2048,
    })
    .unwrap();
    assert!(text.contains("trace.json"));
    assert!(text.contains("2048"));
}

#[test]
fn url_message_names_url() {
    let text = loading_message(&DataSource::FromUrl {
        url: "https://example.com/p.json".to_owned(),
    })
    .unwrap();
    assert!(text.contains("https://example.com/p.json"));
}
