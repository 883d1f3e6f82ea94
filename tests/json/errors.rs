use super::{TestStruct, init_logging};
use opt::{Opt, from_json};

#[test]
fn test_malformed_field_is_decode_error() {
    let result = serde_json::from_str::<TestStruct>(r#"{"Foo":"bar","Bar":"five"}"#);

    let err = result.unwrap_err();
    assert!(err.is_data());
    assert!(err.to_string().contains("expected i32"), "unexpected error: {}", err);
}

#[test]
fn test_syntax_error_is_decode_error() {
    let result = serde_json::from_str::<Opt<i32>>("nulx");

    assert!(result.unwrap_err().is_syntax());
}

#[test]
fn test_helper_error_carries_context() {
    init_logging();

    let err = from_json::<u8>("256").unwrap_err();

    assert!(err.to_string().contains("Failed to parse"));
    assert!(format!("{:#}", err).contains("256"));
}
