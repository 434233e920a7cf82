//! Prompt construction for the sales summary request.

use crate::core::models::SalesInsights;

/// Build the prompt sent to the text-generation service.
///
/// Embeds the four insight values in a fixed template: the monetary figures
/// are rounded to two decimals for presentation only, and the category
/// breakdown is serialized as a JSON object in first-seen order.
#[must_use]
pub fn build_sales_prompt(insights: &SalesInsights) -> String {
    let breakdown =
        serde_json::to_string(&insights.category_sales).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are a retail sales analyst. Here are the aggregated results for the \
         latest batch of sales records:\n\n\
         Total Sales: ${:.2}\n\
         Average Sale: ${:.2}\n\
         Best Performing Category: {}\n\
         Category Breakdown: {}\n\n\
         Provide a brief, business-friendly summary of these results for a \
         non-technical audience.",
        insights.total_sales,
        insights.average_sale,
        insights.best_performing_category,
        breakdown
    )
}
