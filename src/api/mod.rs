//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;

// Re-export the main handler for convenience
pub use handler::function_handler;

/// 400 message for payloads that are not a non-empty array of records.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid input: Expected an array of sales records";

/// 400 message for a record that fails field validation.
pub const INVALID_RECORD_MESSAGE: &str = "Invalid sale record";

/// 500 message returned for any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";
