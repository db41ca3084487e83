#![allow(missing_docs)]

use shared::Failure;

#[test]
fn ok_is_returned() {
    let result: Result<u8, String> = Ok(3);
    assert_eq!(result.or_log_and_panic("Should not panic"), 3);
}

#[test]
#[should_panic(expected = "Could not load: missing")]
fn err_panics_with_message() {
    let result: Result<u8, &str> = Err("missing");
    result.or_log_and_panic("Could not load");
}

#[test]
fn or_log_discards_error() {
    let result: Result<u8, &str> = Err("missing");
    assert_eq!(result.or_log("Could not load"), None);

    let result: Result<u8, &str> = Ok(1);
    assert_eq!(result.or_log("Could not load"), Some(1));
}
