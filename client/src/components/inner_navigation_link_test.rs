use super::*;

#[test]
fn data_source_path_is_root_relative() {
    assert_eq!(data_source_path("compare"), "/compare");
    assert_eq!(data_source_path("uploaded-recordings"), "/uploaded-recordings");
}
