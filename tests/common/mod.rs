//! Common test utilities shared across integration tests.

use password_generator::CompositionRules;

/// Initialize test tracing (call once at the beginning of tests).
///
/// Routes library events at DEBUG to the test writer. Subsequent calls are
/// safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("password_generator=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// One character of each class, length drawn from `[8, 15)`.
pub fn one_of_each() -> CompositionRules {
    CompositionRules {
        min_uppercase: 1,
        min_lowercase: 1,
        min_number: 1,
        min_special_char: 1,
        min_length: 8,
        max_length: 15,
    }
}
