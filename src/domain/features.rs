use super::market::FeatureValue;
use std::collections::HashMap;
use tracing::warn;

/// Assembles the numeric model vector from a row's features, walking
/// `columns` in declared order.
///
/// Identifying columns (crop, state) and the target column (price) are never
/// part of `columns`. A declared column with no numeric value is skipped with
/// a warning; the resulting short vector fails the engine's width guard
/// instead of panicking here.
pub fn assemble(columns: &[String], features: &HashMap<String, FeatureValue>) -> Vec<f64> {
    let mut vector = Vec::with_capacity(columns.len());
    for column in columns {
        match features.get(column).and_then(FeatureValue::as_number) {
            Some(value) => vector.push(value),
            None => warn!("Feature column '{}' has no numeric value; skipping", column),
        }
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_vector_follows_declared_order() {
        let mut features = HashMap::new();
        features.insert("yield_index".to_string(), FeatureValue::Number(2.1));
        features.insert("rainfall_mm".to_string(), FeatureValue::Number(710.0));

        let vector = assemble(&columns(&["rainfall_mm", "yield_index"]), &features);
        assert_eq!(vector, vec![710.0, 2.1]);
    }

    #[test]
    fn test_non_numeric_and_missing_cells_shrink_the_vector() {
        let mut features = HashMap::new();
        features.insert("rainfall_mm".to_string(), FeatureValue::Number(710.0));
        features.insert(
            "season".to_string(),
            FeatureValue::Text("Kharif".to_string()),
        );

        let vector = assemble(&columns(&["rainfall_mm", "season", "yield_index"]), &features);
        assert_eq!(vector, vec![710.0]);
    }
}
