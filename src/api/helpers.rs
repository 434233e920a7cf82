//! Common helper functions for the API handler.
//!
//! This module provides the response builders that shape proxy-integration
//! payloads returned to the HTTP front end.

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::models::SalesInsights;

// ============================================================================
// Response Builders
// ============================================================================

/// 200 body, serialized straight to a string: going through a `Value` first
/// would re-sort `categorySales` alphabetically and lose first-seen order.
#[derive(Serialize)]
struct SuccessBody<'a> {
    insights: &'a SalesInsights,
    summary: &'a str,
}

/// Returns a 200 OK response carrying the computed insights and summary.
#[must_use]
pub fn ok_response(insights: &SalesInsights, summary: &str) -> Value {
    let body = serde_json::to_string(&SuccessBody { insights, summary })
        .unwrap_or_else(|_| "{}".to_string());

    json!({
        "statusCode": 200,
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
