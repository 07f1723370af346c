//! Canonical schema constants for structured logging
//!
//! Every log line emitted through the logging macros carries `component`,
//! `op` and `event`; the remaining keys are used by individual operations.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Record identity
pub const FIELD_PROJECT: &str = "project";
pub const FIELD_RECORD_A: &str = "record_a";
pub const FIELD_RECORD_B: &str = "record_b";

// Pairing sizes, per data side (`input` or `output`)
pub const FIELD_DATA: &str = "data";
pub const FIELD_FILES_A: &str = "files_a";
pub const FIELD_FILES_B: &str = "files_b";
pub const FIELD_MATCHES: &str = "matches";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERROR: &str = "error";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_fields_are_namespaced() {
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
    }
}
