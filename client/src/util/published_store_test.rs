use super::*;

#[test]
fn parse_reads_camel_case_entries() {
    let json = r#"[
        {"profileToken":"abc","name":"Page load","url":"https://share.example/public/abc","publishedAtMs":1700000000000}
    ]"#;
    let items = parse(json).unwrap_or_default();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].profile_token, "abc");
    assert_eq!(items[0].name, "Page load");
    assert_eq!(items[0].published_at_ms, 1_700_000_000_000);
}

#[test]
fn parse_rejects_malformed_json() {
    assert!(parse("{not an array").is_err());
    assert!(parse(r#"[{"name":"missing fields"}]"#).is_err());
}

#[test]
fn parse_empty_array() {
    assert_eq!(parse("[]").map(|items| items.len()).unwrap_or(usize::MAX), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_and_save_are_noops_without_browser() {
    save(&[]);
    assert!(load().is_empty());
    assert_eq!(now_ms(), 0);
}
