use data_processor::ffi::data_processor_init_logging;

// Installing a global subscriber is process-wide, so this binary holds a single test.
#[test]
fn test_logging_installs_once() {
    assert!(data_processor_init_logging());
    assert!(!data_processor_init_logging());
}
