// File: crates/chart-shape/src/types.rs
// Summary: Shared enums and constants (chart types, categories, step/order modes, sensitivities).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Pointer distance (px) within which a marker counts as hit when it has no radius.
pub const DEFAULT_POINT_SENSITIVITY: f64 = 10.0;
/// Extra margin (px) around a bar's bounding box for hit testing.
pub const DEFAULT_BAR_SENSITIVITY: f64 = 2.0;
/// Vertical pointer distance (px) within which a step point counts as hit.
pub const STEP_SENSITIVITY: f64 = 30.0;
/// Bubble markers are hit-tested against their select radius scaled by this factor.
pub const BUBBLE_HIT_FACTOR: f64 = 1.5;

/// Visual rendering mode of a series.
///
/// Declaration order matters: it is the order in which types enter the
/// current-types set when presence is refreshed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    Area,
    AreaLineRange,
    AreaSpline,
    AreaSplineRange,
    AreaStep,
    AreaStepRange,
    Bar,
    Bubble,
    Donut,
    Gauge,
    #[default]
    Line,
    Pie,
    Radar,
    Scatter,
    Spline,
    Step,
}

impl ChartType {
    /// Every chart type, in declaration order.
    pub const ALL: [ChartType; 16] = [
        ChartType::Area,
        ChartType::AreaLineRange,
        ChartType::AreaSpline,
        ChartType::AreaSplineRange,
        ChartType::AreaStep,
        ChartType::AreaStepRange,
        ChartType::Bar,
        ChartType::Bubble,
        ChartType::Donut,
        ChartType::Gauge,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Radar,
        ChartType::Scatter,
        ChartType::Spline,
        ChartType::Step,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ChartType::Area => "area",
            ChartType::AreaLineRange => "area-line-range",
            ChartType::AreaSpline => "area-spline",
            ChartType::AreaSplineRange => "area-spline-range",
            ChartType::AreaStep => "area-step",
            ChartType::AreaStepRange => "area-step-range",
            ChartType::Bar => "bar",
            ChartType::Bubble => "bubble",
            ChartType::Donut => "donut",
            ChartType::Gauge => "gauge",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Radar => "radar",
            ChartType::Scatter => "scatter",
            ChartType::Spline => "spline",
            ChartType::Step => "step",
        }
    }

    /// Whether this type is a member of `category`.
    pub fn belongs_to(self, category: TypeCategory) -> bool {
        category.types().contains(&self)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| ShapeError::UnknownChartType(s.to_string()))
    }
}

/// A grouping of related chart types used for category-level presence queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Line,
    Area,
    AreaRange,
    Arc,
    Step,
    Spline,
}

impl TypeCategory {
    pub const fn types(self) -> &'static [ChartType] {
        use ChartType::*;
        match self {
            TypeCategory::Line => &[
                Line,
                Spline,
                Area,
                AreaSpline,
                AreaSplineRange,
                AreaLineRange,
                Step,
                AreaStep,
                AreaStepRange,
            ],
            TypeCategory::Area => &[
                Area,
                AreaSpline,
                AreaSplineRange,
                AreaLineRange,
                AreaStep,
                AreaStepRange,
            ],
            TypeCategory::AreaRange => &[AreaSplineRange, AreaLineRange, AreaStepRange],
            TypeCategory::Arc => &[Pie, Donut, Gauge, Radar],
            TypeCategory::Step => &[Step, AreaStep, AreaStepRange],
            TypeCategory::Spline => &[Spline, AreaSpline, AreaSplineRange],
        }
    }
}

impl FromStr for TypeCategory {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Line" => Ok(TypeCategory::Line),
            "Area" => Ok(TypeCategory::Area),
            "AreaRange" => Ok(TypeCategory::AreaRange),
            "Arc" => Ok(TypeCategory::Arc),
            "Step" => Ok(TypeCategory::Step),
            "Spline" => Ok(TypeCategory::Spline),
            other => Err(ShapeError::UnknownCategory(other.to_string())),
        }
    }
}

/// Step sub-type used by step-classified series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepType {
    #[default]
    Step,
    StepBefore,
    StepAfter,
}

impl StepType {
    pub const fn name(self) -> &'static str {
        match self {
            StepType::Step => "step",
            StepType::StepBefore => "step-before",
            StepType::StepAfter => "step-after",
        }
    }
}

impl FromStr for StepType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step" => Ok(StepType::Step),
            "step-before" => Ok(StepType::StepBefore),
            "step-after" => Ok(StepType::StepAfter),
            other => Err(ShapeError::UnknownStepType(other.to_string())),
        }
    }
}

/// Draw order of stacked series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrder {
    #[default]
    Desc,
    Asc,
    None,
}
