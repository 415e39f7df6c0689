use data_processor::ffi::{
    data_processor_free_string, data_processor_handle_call, data_processor_increment,
};
use serde_json::{json, Value};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

fn take_string(s: *mut c_char) -> String {
    assert!(!s.is_null());
    let owned = unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string();
    unsafe { data_processor_free_string(s) };
    owned
}

fn call(payload: &str) -> Value {
    let input = CString::new(payload).unwrap();
    let response = take_string(unsafe { data_processor_handle_call(input.as_ptr()) });
    serde_json::from_str(&response).unwrap()
}

#[test]
fn test_direct_increment_through_c_abi() {
    for (input, expected) in [(5i64, 6i64), (0, 1)] {
        let mut value = -42i64;
        let err = unsafe { data_processor_increment(input, &mut value) };
        assert!(err.is_null());
        assert_eq!(value, expected);
    }

    let mut value = 0i64;
    let err = take_string(unsafe { data_processor_increment(-1, &mut value) });
    assert_eq!(err, "data can't be negative");
    assert_eq!(value, -1);
}

#[test]
fn test_method_call_through_c_abi() {
    assert_eq!(
        call(r#"{"method":"dataProcessor_increment","arguments":{"data":41}}"#),
        json!({"status": "success", "value": 42})
    );

    assert_eq!(
        call(r#"{"method":"dataProcessor_increment","arguments":{}}"#),
        json!({
            "status": "error",
            "code": "dataProcessor_increment",
            "message": "Send argument as Map<\"data\", int>"
        })
    );

    assert_eq!(
        call(r#"{"method":"unknown","arguments":{"data":1}}"#),
        json!({"status": "not_implemented"})
    );
}

#[test]
fn test_malformed_payload_is_an_error_result() {
    let response = call("{\"method\":");
    assert_eq!(response["status"], "error");
    assert_eq!(response["code"], "invalid_call");
}

#[test]
fn test_free_string_accepts_null() {
    unsafe { data_processor_free_string(std::ptr::null_mut()) };
}
