// File: crates/chart-shape/src/series.rs
// Summary: Series model (id + ordered data points) and the visible-series store.
// Notes:
// - Values are optional; a missing value behaves like 0 wherever it is scaled or sign-tested.
// - Timestamps are stored as epoch milliseconds so they order and key like plain numbers.

use ahash::AHashSet;
use chrono::{DateTime, Utc};

/// Value carried by one data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataValue {
    Number(f64),
    /// Bubble point with a z dimension driving the marker radius.
    Bubble { y: f64, z: f64 },
    /// Range point (area-range types).
    Range { high: f64, mid: f64, low: f64 },
}

impl DataValue {
    /// Numeric projection used for stacking, sign tests and plain y placement.
    pub fn number(&self) -> f64 {
        match *self {
            DataValue::Number(v) => v,
            DataValue::Bubble { y, .. } => y,
            DataValue::Range { mid, .. } => mid,
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Number(v)
    }
}

/// One data point of a series.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    pub id: String,
    /// Row index within the owning series.
    pub index: usize,
    pub x: Option<f64>,
    pub value: Option<DataValue>,
}

impl Datum {
    pub fn new(id: impl Into<String>, index: usize, x: f64, value: f64) -> Self {
        Self { id: id.into(), index, x: Some(x), value: Some(DataValue::Number(value)) }
    }

    /// Point whose x is a timestamp (stored as epoch milliseconds).
    pub fn at_time(id: impl Into<String>, index: usize, t: DateTime<Utc>, value: f64) -> Self {
        Self::new(id, index, t.timestamp_millis() as f64, value)
    }

    pub fn with_value(mut self, value: Option<DataValue>) -> Self {
        self.value = value;
        self
    }

    pub fn with_x(mut self, x: Option<f64>) -> Self {
        self.x = x;
        self
    }

    /// Numeric value, treating a missing value as 0.
    pub fn number(&self) -> f64 {
        self.value.map(|v| v.number()).unwrap_or(0.0)
    }

    /// True when x is present and not NaN.
    pub fn has_x(&self) -> bool {
        matches!(self.x, Some(x) if !x.is_nan())
    }
}

/// Anything that names a series: an id string, a series, or one of its points.
pub trait SeriesKey {
    fn series_id(&self) -> &str;
}

impl SeriesKey for str {
    fn series_id(&self) -> &str { self }
}

impl SeriesKey for String {
    fn series_id(&self) -> &str { self }
}

impl SeriesKey for Datum {
    fn series_id(&self) -> &str { &self.id }
}

impl SeriesKey for Series {
    fn series_id(&self) -> &str { &self.id }
}

impl<T: SeriesKey + ?Sized> SeriesKey for &T {
    fn series_id(&self) -> &str { (**self).series_id() }
}

/// One named sequence of data points rendered as one visual trace.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub id: String,
    pub values: Vec<Datum>,
}

impl Series {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), values: Vec::new() }
    }

    /// Build a series from `(x, value)` pairs; row indices follow the slice order.
    pub fn with_data(id: impl Into<String>, data: &[(f64, f64)]) -> Self {
        let id = id.into();
        let values = data
            .iter()
            .enumerate()
            .map(|(i, &(x, v))| Datum::new(id.clone(), i, x, v))
            .collect();
        Self { id, values }
    }

    /// Build a series from optional values; `None` keeps the row with a missing value.
    pub fn with_optional(id: impl Into<String>, data: &[(f64, Option<f64>)]) -> Self {
        let id = id.into();
        let values = data
            .iter()
            .enumerate()
            .map(|(i, &(x, v))| Datum {
                id: id.clone(),
                index: i,
                x: Some(x),
                value: v.map(DataValue::Number),
            })
            .collect();
        Self { id, values }
    }

    pub fn push(&mut self, x: Option<f64>, value: Option<DataValue>) {
        let index = self.values.len();
        self.values.push(Datum { id: self.id.clone(), index, x, value });
    }

    /// Sum of absolute values, used to order stacked series.
    pub fn abs_sum(&self) -> f64 {
        self.values.iter().map(|d| d.number().abs()).sum()
    }
}

/// The loaded series collection, in declared order, plus which ids are hidden.
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    series: Vec<Series>,
    hidden: AHashSet<String>,
}

impl SeriesStore {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series, hidden: AHashSet::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn all(&self) -> &[Series] {
        &self.series
    }

    pub fn get(&self, id: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.id.as_str())
    }

    pub fn hide(&mut self, id: impl Into<String>) {
        self.hidden.insert(id.into());
    }

    pub fn show(&mut self, id: &str) {
        self.hidden.remove(id);
    }

    pub fn is_visible(&self, id: &str) -> bool {
        !self.hidden.contains(id)
    }

    /// Visible series in declared order.
    pub fn visible(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| self.is_visible(&s.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_key_as_epoch_millis() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let d = Datum::at_time("a", 0, t, 1.0);
        assert_eq!(d.x, Some(1_704_067_200_000.0));
    }

    #[test]
    fn missing_value_projects_to_zero() {
        let s = Series::with_optional("a", &[(0.0, Some(-2.0)), (1.0, None)]);
        assert_eq!(s.values[1].number(), 0.0);
        assert_eq!(s.abs_sum(), 2.0);
        let bubble = Datum::new("b", 0, 0.0, 0.0).with_value(Some(DataValue::Bubble { y: 3.0, z: 9.0 }));
        assert_eq!(bubble.number(), 3.0);
    }

    #[test]
    fn hidden_series_leave_visible_order() {
        let mut store = SeriesStore::new(vec![Series::new("a"), Series::new("b"), Series::new("c")]);
        store.hide("b");
        let ids: Vec<&str> = store.visible().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        store.show("b");
        assert!(store.is_visible("b"));
    }
}
