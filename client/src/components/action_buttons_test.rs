use super::*;

fn file(name: &str) -> SelectedFile {
    SelectedFile::new(name, 1)
}

// =============================================================
// File selection
// =============================================================

#[test]
fn forwards_only_the_first_selected_file() {
    let mut received = Vec::new();
    let forwarded = forward_first_file(vec![file("a.json"), file("b.json")], |f| received.push(f));
    assert!(forwarded);
    assert_eq!(received, vec![file("a.json")]);
}

#[test]
fn empty_selection_forwards_nothing() {
    let mut calls = 0;
    let forwarded = forward_first_file(Vec::new(), |_| calls += 1);
    assert!(!forwarded);
    assert_eq!(calls, 0);
}

// =============================================================
// URL submission
// =============================================================

#[test]
fn empty_url_is_not_submitted() {
    let mut calls = 0;
    assert!(!forward_url_submission("", |_| calls += 1));
    assert_eq!(calls, 0);
}

#[test]
fn non_empty_url_is_submitted_once_verbatim() {
    let mut received = Vec::new();
    assert!(forward_url_submission("https://example.com/profile.json", |url| received.push(url)));
    assert_eq!(received, vec!["https://example.com/profile.json".to_owned()]);
}

#[test]
fn whitespace_url_is_passed_through_untrimmed() {
    let mut received = Vec::new();
    assert!(forward_url_submission(" ", |url| received.push(url)));
    assert_eq!(received, vec![" ".to_owned()]);
}
