// File: crates/chart-shape/src/offset.rs
// Summary: Pass-scoped stacking context: per-series rows keyed by x, draw order, and normalized totals.
// Notes:
// - Built once per draw pass from the visible series of one shape family, then dropped.
// - Rows are looked up positionally first and by x value second, so series with
//   different lengths or x sets still stack where their x values coincide.

use ahash::AHashMap;

use crate::config::ShapeConfig;
use crate::indices::ShapeIndices;
use crate::scale::Scale;
use crate::series::{Datum, Series};
use crate::types::{DataOrder, StepType};

/// Hashable identity of an x value. Missing and NaN x share one key; -0 and 0 share one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct XKey(u64);

impl XKey {
    pub fn of(x: Option<f64>) -> Self {
        match x {
            Some(v) if v.is_nan() => XKey(f64::NAN.to_bits()),
            Some(v) if v == 0.0 => XKey(0f64.to_bits()),
            Some(v) => XKey(v.to_bits()),
            None => XKey(f64::NAN.to_bits()),
        }
    }
}

/// Per-row-index sums of the visible series, used for percentage stacking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackTotals(Vec<f64>);

impl StackTotals {
    pub fn from_series<'s>(series: impl IntoIterator<Item = &'s Series>) -> Self {
        let mut sums: Vec<f64> = Vec::new();
        for s in series {
            for (i, d) in s.values.iter().enumerate() {
                if sums.len() <= i {
                    sums.resize(i + 1, 0.0);
                }
                sums[i] += d.number();
            }
        }
        Self(sums)
    }

    pub fn total(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Share of the row total as a percentage; 0 when the total is not positive.
    pub fn ratio(&self, d: &Datum) -> f64 {
        match self.total(d.index) {
            Some(total) if total > 0.0 && d.value.is_some() => d.number() / total * 100.0,
            _ => 0.0,
        }
    }
}

/// Sort series into stacking draw order. The sort is stable.
///
/// `Desc` puts the smallest absolute sum first so larger series stack on top of it;
/// `Asc` does the reverse.
pub fn order_for_stacking(series: &mut [&Series], order: DataOrder) {
    match order {
        DataOrder::Desc => series.sort_by(|a, b| a.abs_sum().total_cmp(&b.abs_sum())),
        DataOrder::Asc => series.sort_by(|a, b| b.abs_sum().total_cmp(&a.abs_sum())),
        DataOrder::None => {}
    }
}

/// Pad a step series with cloned head/tail rows so the step covers the gaps on both sides.
///
/// Only applies on a categorized x axis or for `step-before`/`step-after`.
pub fn expand_step_rows(values: &[Datum], config: &ShapeConfig) -> Vec<Datum> {
    let step = config.line_step_type;
    let categorized = config.axis_x_categorized;
    if !(categorized || matches!(step, StepType::StepBefore | StepType::StepAfter)) {
        return values.to_vec();
    }
    let (Some(head), Some(tail)) = (values.first(), values.last()) else {
        return Vec::new();
    };
    let (Some(head_x), Some(tail_x)) = (head.x, tail.x) else {
        return values.to_vec();
    };

    let mut out = Vec::with_capacity(values.len() + 4);
    if categorized && step == StepType::StepAfter {
        out.push(head.clone().with_x(Some(head_x - 2.0)));
    }
    out.push(head.clone().with_x(Some(head_x - 1.0)));
    out.extend_from_slice(values);
    out.push(tail.clone().with_x(Some(tail_x + 1.0)));
    if categorized && step == StepType::StepBefore {
        out.push(tail.clone().with_x(Some(tail_x + 2.0)));
    }
    out
}

#[derive(Clone, Debug)]
pub struct OffsetTarget {
    pub id: String,
    pub rows: Vec<Datum>,
    row_by_x: AHashMap<XKey, usize>,
    values: AHashMap<XKey, f64>,
}

impl OffsetTarget {
    /// `rows` are the series points (step-expanded if needed); `value` picks the stacked
    /// value of a row (raw number or normalized ratio).
    pub fn new(id: impl Into<String>, rows: Vec<Datum>, value: impl Fn(&Datum) -> f64) -> Self {
        let mut row_by_x = AHashMap::with_capacity(rows.len());
        let mut values = AHashMap::with_capacity(rows.len());
        for (i, d) in rows.iter().enumerate() {
            let key = XKey::of(d.x);
            row_by_x.insert(key, i);
            values.insert(key, value(d));
        }
        Self { id: id.into(), rows, row_by_x, values }
    }

    /// Row at position `idx` if its x matches, else the row with that x anywhere in the series.
    pub fn row_at(&self, idx: usize, key: XKey) -> Option<&Datum> {
        match self.rows.get(idx) {
            Some(row) if XKey::of(row.x) == key => Some(row),
            _ => self.row_by_x.get(&key).map(|&i| &self.rows[i]),
        }
    }

    pub fn value_at(&self, key: XKey) -> f64 {
        self.values.get(&key).copied().unwrap_or(0.0)
    }
}

/// Stacking data for one shape family during one draw pass.
#[derive(Clone, Debug, Default)]
pub struct OffsetContext {
    targets: Vec<OffsetTarget>,
    order: AHashMap<String, usize>,
}

impl OffsetContext {
    /// `targets` must already be in draw order.
    pub fn new(targets: Vec<OffsetTarget>) -> Self {
        let order = targets.iter().enumerate().map(|(i, t)| (t.id.clone(), i)).collect();
        tracing::trace!(targets = targets.len(), "offset context built");
        Self { targets, order }
    }

    pub fn targets(&self) -> &[OffsetTarget] {
        &self.targets
    }

    pub fn draw_order(&self, id: &str) -> Option<usize> {
        self.order.get(id).copied()
    }

    /// Pixel offset of `d` (row `idx`): the baseline `y0` plus the scaled contribution of every
    /// same-slot series drawn earlier whose value at the same x has the same sign.
    pub fn stacked_offset(&self, d: &Datum, idx: usize, indices: &ShapeIndices, scale: &dyn Scale, y0: f64) -> f64 {
        let bucket = indices.get(&d.id);
        let slot_of = |id: &str| bucket.and_then(|b| b.get(id));
        let own_slot = slot_of(&d.id);
        let own_order = self.draw_order(&d.id);
        let key = XKey::of(d.x);
        let value = d.number();

        let mut offset = y0;
        for t in self.targets.iter().filter(|t| t.id != d.id) {
            let earlier = matches!((self.draw_order(&t.id), own_order), (Some(a), Some(b)) if a < b);
            if slot_of(&t.id) != own_slot || !earlier {
                continue;
            }
            if let Some(row) = t.row_at(idx, key) {
                if row.number() * value >= 0.0 {
                    offset += scale.apply(t.value_at(key)) - y0;
                }
            }
        }
        offset
    }
}
