/// Salesight - an HTTP endpoint that turns raw sales records into aggregate
/// insights and an AI-generated business summary.
///
/// This crate implements a single-Lambda architecture for the insights API:
/// 1. Validate the posted JSON array of sale records
/// 2. Aggregate totals, the average, and per-category sums in one pass
/// 3. Ask the Gemini API for a business-friendly summary of the numbers
/// 4. Respond with the insights object and the summary verbatim
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for the Gemini `generateContent` call
/// - Tokio for async runtime
///
/// # Example
///
/// ```
/// use salesight::core::insights::{compute_insights, parse_sale_records};
///
/// let payload = serde_json::json!([
///     { "category": "Electronics", "amount": 100.0 },
///     { "category": "Clothing", "amount": 50.0 },
///     { "category": "Electronics", "amount": 200.0 }
/// ]);
///
/// let records = parse_sale_records(payload.as_array().unwrap()).unwrap();
/// let insights = compute_insights(&records);
///
/// assert_eq!(insights.total_sales, 350.0);
/// assert_eq!(insights.best_performing_category, "Electronics");
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda entrypoint.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda entrypoint
/// salesight::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
