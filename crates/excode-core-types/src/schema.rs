//! Canonical schema constants for structured logging and error metadata
//!
//! These constants ensure consistency across all logging, error reporting and
//! every component that tags the same error tree.

// Default metadata keys. Independent callers tagging one error tree rely on
// these values, so they must never change.
pub const DATA_KEY_FOR_ERROR_CODE: &str = "error_code";
pub const DATA_KEY_FOR_ERROR_CODES_VECTOR: &str = "error_codes_vector";

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Code store fields
pub const FIELD_ERROR_CODE_KEY: &str = "error_code_key";
pub const FIELD_ERROR_CODES_VECTOR_KEY: &str = "error_codes_vector_key";
pub const FIELD_FOUND: &str = "found";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
