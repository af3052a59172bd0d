// File: crates/chart-shape/src/classify.rs
// Summary: Chart-type classifier: per-series type assignment, current-type cache and category queries.
// Notes:
// - Every query is total. A series with no recorded type classifies as a line.
// - The current-types cache only ever answers "present"; a miss falls through to a scan.

use ahash::AHashMap;

use crate::config::ShapeConfig;
use crate::series::{Datum, Series, SeriesKey};
use crate::types::{ChartType, TypeCategory};

/// Owned mapping from series id to its explicitly assigned chart type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeAssignment {
    types: AHashMap<String, ChartType>,
}

impl TypeAssignment {
    pub fn get(&self, id: &str) -> Option<ChartType> {
        self.types.get(id).copied()
    }

    /// Record `ty` for `id`, returning the previous assignment.
    pub fn set(&mut self, id: impl Into<String>, ty: ChartType) -> Option<ChartType> {
        self.types.insert(id.into(), ty)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ChartType)> {
        self.types.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Classifier {
    assignment: TypeAssignment,
    /// Global default set through a type change with no target ids.
    default_type: Option<ChartType>,
    current_types: Vec<ChartType>,
    without_fade_in: AHashMap<String, bool>,
    /// Ids of the loaded series, scanned when no subset is given.
    targets: Vec<String>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ShapeConfig) -> Self {
        let mut assignment = TypeAssignment::default();
        for (id, ty) in &config.data_types {
            assignment.set(id.clone(), *ty);
        }
        Self { assignment, default_type: config.data_type, ..Self::default() }
    }

    pub fn assignment(&self) -> &TypeAssignment {
        &self.assignment
    }

    /// Default type for series with no explicit assignment.
    pub fn default_type(&self) -> ChartType {
        self.default_type.unwrap_or_default()
    }

    pub fn current_types(&self) -> &[ChartType] {
        &self.current_types
    }

    /// Record the ids of the loaded series, in declared order.
    pub fn set_targets<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = ids.into_iter().map(Into::into).collect();
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Give every loaded series without an explicit type the configured default type.
    pub fn apply_default_type(&mut self) {
        let Some(ty) = self.default_type else { return };
        for id in &self.targets {
            if !self.assignment.contains(id) {
                self.assignment.set(id.clone(), ty);
            }
        }
    }

    /// Assign `ty` to each of `ids`. With no ids, every loaded series takes `ty` and it
    /// also becomes the default for series loaded later.
    pub fn assign_type(&mut self, ids: &[&str], ty: ChartType) {
        let targets: Vec<String> = if ids.is_empty() {
            self.targets.clone()
        } else {
            ids.iter().map(|s| s.to_string()).collect()
        };

        for id in targets {
            let unchanged = self.assignment.get(&id) == Some(ty);
            self.without_fade_in.insert(id.clone(), unchanged);
            self.assignment.set(id, ty);
        }

        if ids.is_empty() {
            self.default_type = Some(ty);
        }
    }

    /// Whether the last type change left `id`'s type as it was (no fade-in needed).
    pub fn is_without_fade_in(&self, id: &str) -> bool {
        self.without_fade_in.get(id).copied().unwrap_or(false)
    }

    /// Re-derive the current-types set from the assignment. Idempotent.
    pub fn refresh_current_types(&mut self) {
        for ty in ChartType::ALL {
            let has = self.has_type_with(ty, None, true);
            let idx = self.current_types.iter().position(|t| *t == ty);

            match (idx, has) {
                (None, true) => {
                    tracing::debug!(chart_type = %ty, "chart type now present");
                    self.current_types.push(ty);
                }
                (Some(i), false) => {
                    tracing::debug!(chart_type = %ty, "chart type no longer present");
                    self.current_types.remove(i);
                }
                _ => {}
            }
        }
    }

    pub fn has_type(&self, ty: ChartType) -> bool {
        self.has_type_with(ty, None, false)
    }

    /// Presence test with an optional series subset and an option to bypass the cache.
    ///
    /// Resolution order: cache hit, then the subset (or loaded series) with absent types
    /// counting as line, then every recorded assignment, then the default type.
    /// An empty subset skips the loaded-series scan and goes straight to the assignments.
    pub fn has_type_with(&self, ty: ChartType, subset: Option<&[&str]>, from_data: bool) -> bool {
        if !from_data && self.current_types.contains(&ty) {
            return true;
        }

        match subset {
            Some(ids) if !ids.is_empty() => self.scan_ids(ty, ids.iter().copied()),
            None if !self.targets.is_empty() => self.scan_ids(ty, self.targets.iter().map(String::as_str)),
            _ if !self.assignment.is_empty() => self.assignment.iter().any(|(_, t)| t == ty),
            _ => self.default_type() == ty,
        }
    }

    fn scan_ids<'a>(&self, ty: ChartType, mut ids: impl Iterator<Item = &'a str>) -> bool {
        ids.any(|id| match self.assignment.get(id) {
            Some(t) => t == ty,
            None => ty == ChartType::Line,
        })
    }

    /// True if any non-excluded type of `category` is present.
    pub fn has_type_of(&self, category: TypeCategory, subset: Option<&[&str]>, exclude: &[ChartType]) -> bool {
        category
            .types()
            .iter()
            .filter(|t| !exclude.contains(t))
            .any(|t| self.has_type_with(*t, subset, false))
    }

    pub fn has_category(&self, category: TypeCategory) -> bool {
        self.has_type_of(category, None, &[])
    }

    pub fn has_point_type(&self) -> bool {
        self.has_category(TypeCategory::Line)
            || self.has_type(ChartType::Bubble)
            || self.has_type(ChartType::Scatter)
    }

    pub fn has_arc_type(&self, subset: Option<&[&str]>, exclude: &[ChartType]) -> bool {
        self.has_type_of(TypeCategory::Arc, subset, exclude)
    }

    pub fn has_multi_arc_gauge(&self, config: &ShapeConfig) -> bool {
        self.has_type(ChartType::Gauge) && config.gauge_type == "multi"
    }

    /// Whether the subject's assigned type is one of `types`. Unassigned subjects match nothing.
    pub fn is_type_of<K: SeriesKey + ?Sized>(&self, subject: &K, types: &[ChartType]) -> bool {
        self.assignment
            .get(subject.series_id())
            .is_some_and(|t| types.contains(&t))
    }

    pub fn type_of<K: SeriesKey + ?Sized>(&self, subject: &K) -> ChartType {
        self.assignment.get(subject.series_id()).unwrap_or(ChartType::Line)
    }

    pub fn is_line_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        !self.assignment.contains(subject.series_id())
            || self.is_type_of(subject, TypeCategory::Line.types())
    }

    pub fn is_step_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, TypeCategory::Step.types())
    }

    pub fn is_spline_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, TypeCategory::Spline.types())
    }

    pub fn is_area_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, TypeCategory::Area.types())
    }

    pub fn is_area_range_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, TypeCategory::AreaRange.types())
    }

    pub fn is_bar_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, &[ChartType::Bar])
    }

    pub fn is_bubble_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, &[ChartType::Bubble])
    }

    pub fn is_scatter_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, &[ChartType::Scatter])
    }

    pub fn is_pie_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, &[ChartType::Pie])
    }

    pub fn is_donut_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, &[ChartType::Donut])
    }

    pub fn is_gauge_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, &[ChartType::Gauge])
    }

    pub fn is_radar_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, &[ChartType::Radar])
    }

    pub fn is_arc_type<K: SeriesKey + ?Sized>(&self, subject: &K) -> bool {
        self.is_type_of(subject, TypeCategory::Arc.types())
    }

    /// Bubble point carrying a z dimension.
    pub fn is_bubble_z_type(&self, d: &Datum) -> bool {
        self.is_bubble_type(d) && matches!(d.value, Some(crate::series::DataValue::Bubble { .. }))
    }

    /// Circle markers with no point pattern.
    pub fn is_circle_point(&self, config: &ShapeConfig) -> bool {
        config.point_type == "circle" && config.point_pattern.is_empty()
    }

    // ---- data selectors ---------------------------------------------------

    pub fn line_data<'s>(&self, series: &'s Series) -> &'s [Series] {
        if self.is_line_type(series) { std::slice::from_ref(series) } else { &[] }
    }

    pub fn arc_data<'s, T: SeriesKey>(&self, d: &'s T) -> &'s [T] {
        if self.is_arc_type(d) { std::slice::from_ref(d) } else { &[] }
    }

    pub fn bar_data<'s>(&self, series: &'s Series) -> &'s [Datum] {
        if self.is_bar_type(series) { &series.values } else { &[] }
    }

    /// Points that may carry a data label.
    pub fn labelish_data<'s>(&self, series: &'s Series) -> &'s [Datum] {
        let labelish = self.is_bar_type(series)
            || self.is_line_type(series)
            || self.is_scatter_type(series)
            || self.is_bubble_type(series)
            || self.is_radar_type(series);
        if labelish { &series.values } else { &[] }
    }

    pub fn bar_line_bubble_data<'s>(&self, series: &'s Series) -> &'s [Datum] {
        if self.is_bar_type(series) || self.is_line_type(series) || self.is_bubble_type(series) {
            &series.values
        } else {
            &[]
        }
    }
}
