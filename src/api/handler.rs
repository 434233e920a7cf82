//! API Lambda handler - validates sales payloads and shapes responses.
//!
//! This module handles:
//! - Request extraction (HTTP method, body)
//! - Payload validation (array shape, per-record fields)
//! - Insight aggregation and prompt construction
//! - The synchronous text-generation call

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::helpers;
use super::{INTERNAL_ERROR_MESSAGE, INVALID_PAYLOAD_MESSAGE, INVALID_RECORD_MESSAGE};
use crate::ai::TextGenerator;
use crate::ai::prompt_builder::build_sales_prompt;
use crate::core::insights::{compute_insights, parse_sale_records};
use crate::errors::InsightsError;

/// Lambda handler for the sales insights endpoint.
///
/// Validates the posted array of sale records, aggregates it, and returns
/// the insights together with a generated natural-language summary.
///
/// # Errors
///
/// Failures are reported as response payloads (400/405/500); the returned
/// `Result` only exists to satisfy the runtime's service signature.
#[tracing::instrument(level = "info", skip(event, generator))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    generator: &dyn TextGenerator,
) -> Result<Value, Error> {
    info!("Sales insights request received");

    // ========================================================================
    // Method and body extraction
    // ========================================================================

    if let Some(method) = extract_method(&event.payload) {
        if !method.eq_ignore_ascii_case("POST") {
            error!("Rejected {} request: only POST is supported", method);
            return Ok(helpers::err_response(405, "Method Not Allowed"));
        }
    }

    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(response) => return Ok(response),
    };

    // ========================================================================
    // Payload validation
    // ========================================================================

    let payload: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            let err = InsightsError::ParseError(e.to_string());
            error!("Request body is not valid JSON: {}", err);
            return Ok(helpers::err_response(500, INTERNAL_ERROR_MESSAGE));
        }
    };

    let Some(items) = payload.as_array().filter(|items| !items.is_empty()) else {
        return Ok(helpers::err_response(400, INVALID_PAYLOAD_MESSAGE));
    };

    let Some(records) = parse_sale_records(items) else {
        return Ok(helpers::err_response(400, INVALID_RECORD_MESSAGE));
    };

    // ========================================================================
    // Aggregation and summary generation
    // ========================================================================

    let insights = compute_insights(&records);
    info!(
        record_count = records.len(),
        category_count = insights.category_sales.len(),
        "Computed sales insights"
    );

    let prompt = build_sales_prompt(&insights);

    match generator.generate(&prompt).await {
        Ok(summary) => Ok(helpers::ok_response(&insights, &summary)),
        Err(e) => {
            error!("Failed to generate sales summary: {}", e);
            Ok(helpers::err_response(500, INTERNAL_ERROR_MESSAGE))
        }
    }
}

// ============================================================================
// Request Extraction Helpers
// ============================================================================

fn extract_method(payload: &Value) -> Option<&str> {
    payload
        .get("requestContext")
        .and_then(|ctx| ctx.get("http"))
        .and_then(|http| http.get("method"))
        .and_then(|m| m.as_str())
        .or_else(|| payload.get("httpMethod").and_then(|m| m.as_str()))
}

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, INVALID_PAYLOAD_MESSAGE));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, INVALID_PAYLOAD_MESSAGE));
    };

    Ok(body_str)
}
