//! C ABI for mobile hosts.
//!
//! A JNI shim, Swift or Dart FFI links against these symbols:
//! 1. `data_processor_increment` for the direct "value, error" call
//! 2. `data_processor_handle_call` for method-channel style JSON calls
//! 3. `data_processor_free_string` to release every returned string

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::sync::OnceLock;

use crate::config::ChannelConfig;
use crate::core::channel::{encode_result, MethodChannel, INVALID_CALL_CODE};
use crate::core::processor::DataProcessor;
use crate::core::{Incrementer, MethodResult};
use crate::utils::logger;

fn default_channel() -> &'static MethodChannel<ChannelConfig, DataProcessor> {
    static CHANNEL: OnceLock<MethodChannel<ChannelConfig, DataProcessor>> = OnceLock::new();
    CHANNEL.get_or_init(|| MethodChannel::new(ChannelConfig::default(), DataProcessor::new()))
}

fn into_c_string(s: String) -> *mut c_char {
    // Messages are produced by this crate and never contain NUL.
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

fn error_json(message: &str) -> *mut c_char {
    into_c_string(encode_result(&MethodResult::error(INVALID_CALL_CODE, message)))
}

/// Increment `data`.
///
/// The outcome value is written to `out_value` when it is non-null: `data + 1`
/// on success, `data` unchanged on failure. Returns null on success or the
/// error message.
///
/// # Safety
/// - `out_value` must be null or point to writable memory for one `i64`
/// - A non-null return must be freed with `data_processor_free_string`
#[no_mangle]
pub unsafe extern "C" fn data_processor_increment(data: i64, out_value: *mut i64) -> *mut c_char {
    let outcome = DataProcessor::new().increment_outcome(data);

    if !out_value.is_null() {
        unsafe { *out_value = outcome.value };
    }

    outcome.error.map_or(ptr::null_mut(), into_c_string)
}

/// Dispatch a JSON method call on the default channel and return the JSON result.
///
/// # Safety
/// - `json` must be a valid, null-terminated C string
/// - The returned string must be freed with `data_processor_free_string`
#[no_mangle]
pub unsafe extern "C" fn data_processor_handle_call(json: *const c_char) -> *mut c_char {
    if json.is_null() {
        return error_json("null JSON pointer");
    }

    let Ok(payload) = unsafe { CStr::from_ptr(json) }.to_str() else {
        return error_json("invalid UTF-8 in JSON");
    };

    into_c_string(default_channel().handle_json(payload))
}

/// Free a string returned by this library.
///
/// # Safety
/// - `s` must have been returned by one of the `data_processor_*` functions
/// - Must not be called more than once on the same pointer
#[no_mangle]
pub unsafe extern "C" fn data_processor_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Install the JSON log subscriber. Returns `false` if one was already installed.
#[no_mangle]
pub extern "C" fn data_processor_init_logging() -> bool {
    logger::init_bridge_logger()
}

/// Library version. The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn data_processor_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr().cast::<c_char>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take_string(s: *mut c_char) -> Option<String> {
        if s.is_null() {
            return None;
        }
        let owned = unsafe { CStr::from_ptr(s) }.to_string_lossy().into_owned();
        unsafe { data_processor_free_string(s) };
        Some(owned)
    }

    #[test]
    fn test_increment_success_returns_null() {
        let mut value = 0i64;
        let err = unsafe { data_processor_increment(5, &mut value) };
        assert!(err.is_null());
        assert_eq!(value, 6);
    }

    #[test]
    fn test_increment_failure_keeps_input() {
        let mut value = 0i64;
        let err = take_string(unsafe { data_processor_increment(-1000, &mut value) });
        assert_eq!(err.as_deref(), Some("data can't be negative"));
        assert_eq!(value, -1000);
    }

    #[test]
    fn test_increment_tolerates_null_out_pointer() {
        assert!(unsafe { data_processor_increment(1, ptr::null_mut()) }.is_null());
    }

    #[test]
    fn test_null_call_is_an_error_result() {
        let response = take_string(unsafe { data_processor_handle_call(ptr::null()) }).unwrap();
        assert!(response.contains("null JSON pointer"));
    }

    #[test]
    fn test_version_matches_package() {
        let version = unsafe { CStr::from_ptr(data_processor_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
