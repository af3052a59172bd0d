// File: crates/demo/src/load.rs
// Summary: Long-format CSV loader (one row per point: series, x, value) and JSON config loading.

use anyhow::{Context, Result};
use chart_shape::{DataValue, Series, SeriesStore, ShapeConfig};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Load points grouped by series id, keeping first-seen series order and row order.
/// Empty or unparsable values are kept as missing points.
pub fn load_series_csv(path: &Path) -> Result<SeriesStore> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_series = idx(&["series", "id", "name"]).context("missing `series` column")?;
    let i_x = idx(&["x", "time", "timestamp", "date"]);
    let i_value = idx(&["value", "y"]).context("missing `value` column")?;

    let mut series: Vec<Series> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let id = rec.get(i_series).unwrap_or("");
        if id.is_empty() {
            tracing::warn!(row = row + 1, "row without series id skipped");
            continue;
        }

        let x = i_x.and_then(|i| rec.get(i)).and_then(parse_x);
        let value = rec
            .get(i_value)
            .and_then(|s| s.parse::<f64>().ok())
            .map(DataValue::Number);

        let pos = match series.iter().position(|s| s.id == id) {
            Some(p) => p,
            None => {
                series.push(Series::new(id));
                series.len() - 1
            }
        };
        series[pos].push(x, value);
    }

    Ok(SeriesStore::new(series))
}

/// Plain numbers pass through; RFC 3339 timestamps become epoch milliseconds.
pub fn parse_x(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| t.with_timezone(&Utc).timestamp_millis() as f64)
}

pub fn load_config(path: &Path) -> Result<ShapeConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ShapeConfig::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}
