// File: crates/demo/src/csv_input.rs
// Summary: Load `label,value` rows from CSV into chart attributes.

use anyhow::{Context, Result};
use chart_core::{Attributes, ChartKind};
use std::path::Path;

/// One row of a `label,value` file. The value stays raw; charts read bad numbers as 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

/// Read rows. A header row is detected when its value column is not numeric.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(0).unwrap_or("").to_string();
        let value = rec.get(1).unwrap_or("").to_string();
        if i == 0 && value.parse::<f64>().is_err() {
            tracing::debug!(?label, ?value, "skipping header row");
            continue;
        }
        if label.is_empty() && value.is_empty() {
            continue;
        }
        rows.push(Row { label, value });
    }
    tracing::info!(rows = rows.len(), path = %path.display(), "loaded csv");
    Ok(rows)
}

/// Attributes for `kind` from rows. Radar `max` is the largest value (at least 1).
pub fn rows_to_attrs(kind: ChartKind, rows: &[Row]) -> Attributes {
    let values = rows.iter().map(|r| r.value.as_str()).collect::<Vec<_>>().join(";");
    let labels = rows.iter().map(|r| r.label.as_str()).collect::<Vec<_>>().join(";");
    match kind {
        ChartKind::Pie | ChartKind::Bar => Attributes::new().with("data", values).with("labels", labels),
        ChartKind::Radar => {
            let max = rows
                .iter()
                .filter_map(|r| r.value.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .fold(1.0_f64, f64::max);
            Attributes::new()
                .with("scores", values)
                .with("labels", labels)
                .with("max", max.to_string())
        }
    }
}
