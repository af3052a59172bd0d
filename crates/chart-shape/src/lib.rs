// File: crates/chart-shape/src/lib.rs
// Summary: Library entry point; exports chart-type classification, shape indices, geometry and curves.

pub mod types;
pub mod error;
pub mod series;
pub mod config;
pub mod axis;
pub mod scale;
pub mod geometry;
pub mod classify;
pub mod indices;
pub mod offset;
pub mod shape;
pub mod hit;
pub mod curve;

pub use types::{ChartType, DataOrder, StepType, TypeCategory};
pub use error::{Result, ShapeError};
pub use series::{DataValue, Datum, Series, SeriesKey, SeriesStore};
pub use config::ShapeConfig;
pub use axis::{AxisId, ScaleKind};
pub use scale::{AxisScales, ContinuousScale, Scale, ScaleResolver};
pub use geometry::{Point, Rect};
pub use classify::{Classifier, TypeAssignment};
pub use indices::{IndexBucket, ShapeIndices};
pub use offset::{OffsetContext, StackTotals};
pub use shape::{BarOffset, GeometryEngine, ShapeFamilies};
pub use hit::{MarkerKind, ShapeNode};
pub use curve::{draw_line, is_interpolation_type, lookup_curve, CurveType, LineCurve, PathBuilder, PathSink};
