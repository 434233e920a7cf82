//! Validation and aggregation for batches of sale records.

use serde_json::Value;

use super::models::{CategoryBreakdown, SaleRecord, SalesInsights};

/// Validate raw payload items as sale records.
///
/// Each item must be an object carrying a non-empty string `category` and a
/// non-negative numeric `amount`; extra fields are ignored. Validation
/// short-circuits on the first invalid item, rejecting the whole batch.
pub fn parse_sale_records(items: &[Value]) -> Option<Vec<SaleRecord>> {
    let mut records = Vec::with_capacity(items.len());

    for item in items {
        let category = item.get("category")?.as_str()?;
        if category.is_empty() {
            return None;
        }

        let amount = item.get("amount")?.as_f64()?;
        if amount < 0.0 {
            return None;
        }

        records.push(SaleRecord {
            category: category.to_string(),
            amount,
        });
    }

    Some(records)
}

/// Aggregate a validated batch into sales insights.
///
/// A single pass accumulates the grand total and per-category sums in
/// first-seen order. The best category is then chosen by a strictly-greater
/// scan starting from an empty name and a zero amount, so the first category
/// to reach the top amount keeps the title on ties and an all-zero batch
/// reports an empty best category.
///
/// Callers must reject empty batches beforehand; the average divides by the
/// record count.
pub fn compute_insights(records: &[SaleRecord]) -> SalesInsights {
    let mut total_sales = 0.0;
    let mut category_sales = CategoryBreakdown::default();

    for record in records {
        total_sales += record.amount;
        category_sales.add(&record.category, record.amount);
    }

    let mut best_name = "";
    let mut best_amount = 0.0;
    for (category, amount) in category_sales.iter() {
        if *amount > best_amount {
            best_name = category;
            best_amount = *amount;
        }
    }

    SalesInsights {
        total_sales,
        average_sale: total_sales / records.len() as f64,
        best_performing_category: best_name.to_string(),
        category_sales,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap()
    }

    #[test]
    fn test_parse_accepts_integer_and_float_amounts() {
        let records = parse_sale_records(&items(json!([
            { "category": "Electronics", "amount": 100 },
            { "category": "Clothing", "amount": 49.99 }
        ])))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, "Electronics");
        assert_eq!(records[0].amount, 100.0);
        assert_eq!(records[1].amount, 49.99);
    }

    #[test]
    fn test_parse_accepts_zero_amount() {
        let records = parse_sale_records(&items(json!([
            { "category": "Returns", "amount": 0 }
        ])));

        assert!(records.is_some());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let records = parse_sale_records(&items(json!([
            { "category": "Books", "amount": 12.5, "sku": "B-17", "qty": 3 }
        ])))
        .unwrap();

        assert_eq!(records[0].category, "Books");
        assert_eq!(records[0].amount, 12.5);
    }

    #[test]
    fn test_parse_rejects_missing_category() {
        assert!(parse_sale_records(&items(json!([{ "amount": 10 }]))).is_none());
    }

    #[test]
    fn test_parse_rejects_empty_category() {
        assert!(parse_sale_records(&items(json!([{ "category": "", "amount": 10 }]))).is_none());
    }

    #[test]
    fn test_parse_rejects_non_string_category() {
        assert!(parse_sale_records(&items(json!([{ "category": 7, "amount": 10 }]))).is_none());
        assert!(parse_sale_records(&items(json!([{ "category": null, "amount": 10 }]))).is_none());
    }

    #[test]
    fn test_parse_rejects_missing_amount() {
        assert!(parse_sale_records(&items(json!([{ "category": "Books" }]))).is_none());
    }

    #[test]
    fn test_parse_rejects_negative_amount() {
        assert!(
            parse_sale_records(&items(json!([{ "category": "Books", "amount": -0.01 }])))
                .is_none()
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        assert!(
            parse_sale_records(&items(json!([{ "category": "Books", "amount": "10" }])))
                .is_none()
        );
        assert!(
            parse_sale_records(&items(json!([{ "category": "Books", "amount": true }])))
                .is_none()
        );
    }

    #[test]
    fn test_parse_rejects_non_object_items() {
        assert!(parse_sale_records(&items(json!([null]))).is_none());
        assert!(parse_sale_records(&items(json!(["sale"]))).is_none());
        assert!(parse_sale_records(&items(json!([42]))).is_none());
    }

    #[test]
    fn test_parse_rejects_batch_on_first_invalid_record() {
        // A single bad record poisons the batch even when the rest is valid.
        let records = parse_sale_records(&items(json!([
            { "category": "Electronics", "amount": 100 },
            { "category": "Clothing", "amount": -5 },
            { "category": "Books", "amount": 20 }
        ])));

        assert!(records.is_none());
    }
}
