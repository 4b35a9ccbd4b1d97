use crate::domain::errors::LoadError;
use crate::domain::market::{FeatureValue, ReferenceRow, ReferenceTable};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::io::Read;
use tracing::info;

/// Builds a reference table from CSV with a header row.
///
/// `Crop`, `State` and `Price` are required (matched case-insensitively);
/// every other header becomes a feature column, in header order. Cells that
/// parse as f64 become numeric features, anything else is kept as text.
/// Row order is preserved, so chronologically sorted input keeps the
/// latest-observation lookup correct.
pub fn from_csv<R: Read>(reader: R) -> Result<ReferenceTable, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LoadError::Malformed {
            reason: format!("reference CSV header: {}", e),
        })?
        .clone();

    let crop_index = required_column(&headers, "crop")?;
    let state_index = required_column(&headers, "state")?;
    let price_index = required_column(&headers, "price")?;

    let feature_indices: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(index, _)| ![crop_index, state_index, price_index].contains(index))
        .map(|(index, name)| (index, name.to_string()))
        .collect();

    let mut rows = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| LoadError::Malformed {
            reason: format!("reference CSV row {}: {}", line + 1, e),
        })?;

        let price_cell = record.get(price_index).unwrap_or("");
        let price = price_cell
            .trim()
            .parse::<Decimal>()
            .map_err(|e| LoadError::Malformed {
                reason: format!("reference CSV row {}: price '{}': {}", line + 1, price_cell, e),
            })?;

        let mut features = HashMap::new();
        for (index, name) in &feature_indices {
            let cell = record.get(*index).unwrap_or("").trim();
            if cell.is_empty() {
                continue;
            }
            let value = match cell.parse::<f64>() {
                Ok(number) => FeatureValue::Number(number),
                Err(_) => FeatureValue::Text(cell.to_string()),
            };
            features.insert(name.clone(), value);
        }

        rows.push(ReferenceRow {
            crop: record.get(crop_index).unwrap_or("").trim().to_string(),
            state: record.get(state_index).unwrap_or("").trim().to_string(),
            features,
            price,
        });
    }

    let feature_columns: Vec<String> = feature_indices.into_iter().map(|(_, name)| name).collect();

    info!(
        "Parsed reference CSV: {} rows, {} feature columns",
        rows.len(),
        feature_columns.len()
    );

    Ok(ReferenceTable::new(feature_columns, rows))
}

fn required_column(headers: &csv::StringRecord, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| LoadError::Malformed {
            reason: format!("reference CSV is missing required column '{}'", name),
        })
}
