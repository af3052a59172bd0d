// File: crates/chart-shape/src/shape.rs
// Summary: Geometry engine: shape indices per family, per-datum x/y positions, baselines and stack offsets.
// Notes:
// - The engine only borrows its collaborators. Indices and offset contexts it builds belong
//   to the caller's draw pass and must not be kept across passes.

use ahash::AHashMap;

use crate::classify::Classifier;
use crate::config::ShapeConfig;
use crate::curve::{self, CurveType};
use crate::indices::{IndexBucket, ShapeIndices};
use crate::offset::{expand_step_rows, order_for_stacking, OffsetContext, OffsetTarget, StackTotals};
use crate::scale::{Scale, ScaleResolver};
use crate::series::{DataValue, Datum, Series, SeriesStore};
use crate::types::{ChartType, TypeCategory};

/// Horizontal slot width for multi-series layouts.
#[derive(Clone, Debug, PartialEq)]
pub enum BarOffset {
    /// Even spacing: every series slot is `width` wide.
    Width(f64),
    /// Precomputed widths: a default, per-series overrides, and one entry per ordinal.
    Table {
        width: f64,
        per_series: AHashMap<String, f64>,
        total: Vec<f64>,
    },
}

impl BarOffset {
    pub fn width(&self) -> f64 {
        match self {
            BarOffset::Width(w) => *w,
            BarOffset::Table { width, .. } => *width,
        }
    }

    /// Series-specific width when set and non-zero, else the default width.
    pub fn width_for(&self, id: &str) -> f64 {
        match self {
            BarOffset::Width(w) => *w,
            BarOffset::Table { width, per_series, .. } => per_series
                .get(id)
                .copied()
                .filter(|w| *w != 0.0)
                .unwrap_or(*width),
        }
    }

    /// Half of the summed per-ordinal widths; 0 without a table.
    pub fn half_total(&self) -> f64 {
        match self {
            BarOffset::Table { total, .. } if !total.is_empty() => total.iter().sum::<f64>() / 2.0,
            _ => 0.0,
        }
    }

    /// Sum of per-ordinal widths for ordinals `0..=ordinal`.
    pub fn total_through(&self, ordinal: usize) -> f64 {
        match self {
            BarOffset::Table { total, .. } => total.iter().take(ordinal + 1).sum(),
            BarOffset::Width(_) => 0.0,
        }
    }

    fn is_set(&self) -> bool {
        match self {
            BarOffset::Width(w) => *w != 0.0 && !w.is_nan(),
            BarOffset::Table { .. } => true,
        }
    }
}

/// Shape indices for each family present in the chart.
#[derive(Clone, Debug, Default)]
pub struct ShapeFamilies {
    pub line: Option<ShapeIndices>,
    pub area: Option<ShapeIndices>,
    pub bar: Option<ShapeIndices>,
}

pub struct GeometryEngine<'a, S: ScaleResolver + ?Sized> {
    pub(crate) classifier: &'a Classifier,
    pub(crate) scales: &'a S,
    pub(crate) config: &'a ShapeConfig,
    pub(crate) data: &'a SeriesStore,
}

impl<'a, S: ScaleResolver + ?Sized> Clone for GeometryEngine<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ScaleResolver + ?Sized> Copy for GeometryEngine<'a, S> {}

impl<'a, S: ScaleResolver + ?Sized> GeometryEngine<'a, S> {
    pub fn new(classifier: &'a Classifier, scales: &'a S, config: &'a ShapeConfig, data: &'a SeriesStore) -> Self {
        Self { classifier, scales, config, data }
    }

    pub fn classifier(&self) -> &'a Classifier {
        self.classifier
    }

    pub fn config(&self) -> &'a ShapeConfig {
        self.config
    }

    /// Visible series passing `filter`, in declared order.
    pub fn visible_of(&self, filter: impl Fn(&Series) -> bool) -> Vec<&'a Series> {
        self.data.visible().filter(|s| filter(s)).collect()
    }

    /// Y scale of the axis `id` is plotted against.
    pub fn y_scale(&self, id: &str, sub: bool) -> &'a dyn Scale {
        self.scales.y(self.config.axis_of(id), sub)
    }

    pub fn shape_indices(&self, filter: impl Fn(&Series) -> bool) -> ShapeIndices {
        ShapeIndices::build(self.visible_of(filter), self.config)
    }

    /// Indices for every family the current types call for.
    pub fn shape_families(&self) -> ShapeFamilies {
        let c = self.classifier;
        let mut families = ShapeFamilies::default();

        if c.has_category(TypeCategory::Line) || c.has_type(ChartType::Bubble) || c.has_type(ChartType::Scatter) {
            families.line = Some(self.shape_indices(|s| c.is_line_type(s)));

            if c.has_category(TypeCategory::Area) {
                families.area = Some(self.shape_indices(|s| c.is_area_type(s)));
            }
        }

        if c.has_type(ChartType::Bar) {
            families.bar = Some(self.shape_indices(|s| c.is_bar_type(s)));
        }

        families
    }

    /// Per-datum x position for slotted shapes.
    ///
    /// With a width table the whole group is centred on the raw x position; otherwise
    /// slots are spaced evenly by `offset.width()`. Bar padding is then spread so the
    /// group stays symmetric.
    pub fn shape_x<'i>(&self, offset: &'i BarOffset, indices: &'i ShapeIndices, sub: bool) -> impl Fn(&Datum) -> f64 + 'i
    where
        'a: 'i,
    {
        let x_scale = self.scales.x(sub);
        let padding = self.config.bar_padding;
        let half_width = offset.half_total();

        move |d: &Datum| {
            let bucket = indices.get(&d.id);
            let index = bucket.and_then(|b| b.get(&d.id)).unwrap_or(0);
            let targets = bucket.map_or(1, IndexBucket::target_count);
            let mut x = 0.0;

            if let Some(raw) = d.x.filter(|v| !v.is_nan()) {
                let pos = x_scale.apply(raw);
                x = if half_width != 0.0 && !half_width.is_nan() {
                    pos - offset.width_for(&d.id) + offset.total_through(index) - half_width
                } else {
                    pos - offset.width() * (targets as f64 / 2.0 - index as f64)
                };
            }

            if offset.is_set() && x != 0.0 && targets > 1 && padding != 0.0 {
                if index > 0 {
                    x += padding * index as f64;
                }
                if targets > 2 {
                    x -= (targets - 1) as f64 * padding / 2.0;
                } else if targets == 2 {
                    x -= padding / 2.0;
                }
            }

            x
        }
    }

    /// Per-datum y position: percentage of the row total when stacking is normalized,
    /// the bubble's y when it carries z, else the raw value.
    pub fn shape_y(&self, sub: bool) -> impl Fn(&Datum) -> f64 + 'a {
        let engine = *self;
        let totals = self
            .config
            .is_stack_normalized()
            .then(|| StackTotals::from_series(self.data.visible()));

        move |d: &Datum| {
            let value = match (&totals, d.value) {
                (Some(t), _) => t.ratio(d),
                (None, Some(DataValue::Bubble { y, .. })) if engine.classifier.is_bubble_z_type(d) => y,
                (None, _) => d.number(),
            };
            engine.y_scale(&d.id, sub).apply(value)
        }
    }

    /// Baseline value for bars and areas: the y-domain minimum when the series is
    /// ungrouped and that minimum is positive, else 0.
    pub fn shape_y_min(&self, id: &str) -> f64 {
        let (min, _) = self.y_scale(id, false).domain();
        if !self.config.is_grouped(id) && min > 0.0 { min } else { 0.0 }
    }

    /// Precompute the stacking context for visible series passing `filter`.
    pub fn shape_offset_data(&self, filter: impl Fn(&Series) -> bool) -> OffsetContext {
        let mut targets = self.visible_of(filter);
        order_for_stacking(&mut targets, self.config.data_order);

        let totals = self
            .config
            .is_stack_normalized()
            .then(|| StackTotals::from_series(self.data.visible()));
        let stacked_value = |d: &Datum| match &totals {
            Some(t) => t.ratio(d),
            None => d.number(),
        };

        let targets = targets
            .into_iter()
            .map(|s| {
                let rows = if self.classifier.is_step_type(s) {
                    expand_step_rows(&s.values, self.config)
                } else {
                    s.values.clone()
                };
                OffsetTarget::new(s.id.clone(), rows, stacked_value)
            })
            .collect();

        OffsetContext::new(targets)
    }

    /// Per-datum stack offset (pixels) for the series passing `filter`.
    pub fn shape_offset<'i>(
        &self,
        filter: impl Fn(&Series) -> bool,
        indices: &'i ShapeIndices,
        sub: bool,
    ) -> impl Fn(&Datum, usize) -> f64 + 'i
    where
        'a: 'i,
    {
        let engine = *self;
        let context = self.shape_offset_data(filter);

        move |d: &Datum, idx: usize| engine.stack_offset_in(&context, indices, d, idx, sub)
    }

    /// Stack offset of one datum against an already-built context.
    pub fn stack_offset_in(&self, context: &OffsetContext, indices: &ShapeIndices, d: &Datum, idx: usize, sub: bool) -> f64 {
        let scale = self.y_scale(&d.id, sub);
        let y0 = scale.apply(self.shape_y_min(&d.id));
        context.stacked_offset(d, idx, indices, scale, y0)
    }

    /// Curve to draw `d`'s series with.
    pub fn interpolation(&self, d: &Datum) -> CurveType {
        curve::resolve_interpolation(self.classifier, self.config, d)
    }
}
