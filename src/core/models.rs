use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One transaction from the request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub category: String,
    pub amount: f64,
}

/// Per-category sales totals in first-seen order.
///
/// Order matters twice: the best-category scan resolves ties in favor of the
/// earliest entry, and the serialized `categorySales` object lists categories
/// in the order they first appeared in the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Vec<(String, f64)>);

impl CategoryBreakdown {
    /// Add an amount to a category's running total, appending the category
    /// on first sight.
    pub fn add(&mut self, category: &str, amount: f64) {
        if let Some((_, total)) = self.0.iter_mut().find(|(name, _)| name == category) {
            *total += amount;
        } else {
            self.0.push((category.to_string(), amount));
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, f64)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, total) in &self.0 {
            map.serialize_entry(category, total)?;
        }
        map.end()
    }
}

/// Aggregate statistics computed from one batch of sale records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInsights {
    pub total_sales: f64,
    pub average_sale: f64,
    pub category_sales: CategoryBreakdown,
    pub best_performing_category: String,
}
