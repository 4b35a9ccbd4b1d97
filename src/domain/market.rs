use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single feature cell in a reference row.
///
/// Textual values (season, variety) are carried alongside numeric ones but
/// only numbers enter the model vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
}

impl FeatureValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) => Some(*n),
            FeatureValue::Text(_) => None,
        }
    }
}

/// One historical observation of a crop in a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub crop: String,
    pub state: String,
    #[serde(default)]
    pub features: HashMap<String, FeatureValue>,
    pub price: Decimal,
}

/// Historical (crop, state, features, price) rows plus the ordered numeric
/// feature schema.
///
/// `feature_columns` order MUST match exactly the order the scaler and model
/// were fitted with. Any change here is a breaking change for artifacts.
///
/// Precondition: rows sharing a (crop, state) pair are appended oldest-first,
/// so the last match is the most recent observation. The table is never
/// reordered after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub feature_columns: Vec<String>,
    pub rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    pub fn new(feature_columns: Vec<String>, rows: Vec<ReferenceRow>) -> Self {
        Self {
            feature_columns,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Distinct crop names in first-seen order, for selection surfaces.
    pub fn crops(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.iter().any(|c| c.eq_ignore_ascii_case(&row.crop)) {
                seen.push(row.crop.as_str());
            }
        }
        seen
    }

    /// Distinct state names in first-seen order, for selection surfaces.
    pub fn states(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.iter().any(|s| s.eq_ignore_ascii_case(&row.state)) {
                seen.push(row.state.as_str());
            }
        }
        seen
    }

    /// All rows matching the crop/state pair, case-insensitively.
    pub fn matching(&self, crop: &str, state: &str) -> Vec<&ReferenceRow> {
        self.rows
            .iter()
            .filter(|row| {
                row.crop.eq_ignore_ascii_case(crop) && row.state.eq_ignore_ascii_case(state)
            })
            .collect()
    }

    /// The most recent observation for the crop/state pair, assuming the
    /// chronological append order documented above.
    pub fn latest_for(&self, crop: &str, state: &str) -> Option<&ReferenceRow> {
        self.rows.iter().rev().find(|row| {
            row.crop.eq_ignore_ascii_case(crop) && row.state.eq_ignore_ascii_case(state)
        })
    }

    /// Mean price of a crop across all states, or `None` if the crop is
    /// absent from the table.
    pub fn average_price(&self, crop: &str) -> Option<Decimal> {
        let prices: Vec<Decimal> = self
            .rows
            .iter()
            .filter(|row| row.crop.eq_ignore_ascii_case(crop))
            .map(|row| row.price)
            .collect();
        if prices.is_empty() {
            return None;
        }
        let total: Decimal = prices.iter().sum();
        Some(total / Decimal::from(prices.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(crop: &str, state: &str, price: Decimal) -> ReferenceRow {
        ReferenceRow {
            crop: crop.to_string(),
            state: state.to_string(),
            features: HashMap::new(),
            price,
        }
    }

    fn table() -> ReferenceTable {
        ReferenceTable::new(
            vec!["rainfall_mm".to_string()],
            vec![
                row("Wheat", "Tamil Nadu", dec!(1900)),
                row("Wheat", "Tamil Nadu", dec!(2000)),
                row("Wheat", "Punjab", dec!(2100)),
                row("Rice", "Punjab", dec!(1500)),
            ],
        )
    }

    #[test]
    fn test_distinct_crops_and_states() {
        let table = table();
        assert_eq!(table.crops(), vec!["Wheat", "Rice"]);
        assert_eq!(table.states(), vec!["Tamil Nadu", "Punjab"]);
    }

    #[test]
    fn test_latest_for_picks_last_match() {
        let table = table();
        let latest = table.latest_for("Wheat", "Tamil Nadu").unwrap();
        assert_eq!(latest.price, dec!(2000));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let table = table();
        assert_eq!(table.matching("wheat", "TAMIL NADU").len(), 2);
        assert!(table.latest_for("wheat", "punjab").is_some());
    }

    #[test]
    fn test_average_price_spans_states() {
        let table = table();
        assert_eq!(table.average_price("Wheat"), Some(dec!(2000)));
        assert_eq!(table.average_price("Sugarcane"), None);
    }
}
