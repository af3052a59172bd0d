// File: crates/chart-shape/src/curve/mod.rs
// Summary: Curve selection for line-family series and the curve generators behind each name.
// Notes:
// - Generators follow the line_start / point / line_end protocol and write to a PathSink.
// - A single-point segment is emitted as move_to + close_path so renderers can still draw a dot.

use std::fmt;
use std::str::FromStr;

use crate::classify::Classifier;
use crate::config::ShapeConfig;
use crate::error::ShapeError;
use crate::series::Datum;
use crate::types::StepType;

mod basis;
mod cardinal;
mod catmull_rom;
mod linear;
mod monotone;
mod natural;
pub mod path;
mod step;

pub use basis::{Basis, BasisClosed, BasisOpen, Bundle};
pub use cardinal::{Cardinal, CardinalClosed, CardinalOpen};
pub use catmull_rom::{CatmullRom, CatmullRomClosed, CatmullRomOpen};
pub use linear::{Linear, LinearClosed};
pub use monotone::{MonotoneX, MonotoneY};
pub use natural::Natural;
pub use path::{PathBuilder, PathCommand, PathSink};
pub use step::Step;

pub const CARDINAL_TENSION: f64 = 0.0;
pub const CATMULL_ROM_ALPHA: f64 = 0.5;
pub const BUNDLE_BETA: f64 = 0.85;

/// A curve generator fed one line segment at a time.
pub trait LineCurve {
    fn line_start(&mut self);
    fn line_end(&mut self);
    fn point(&mut self, x: f64, y: f64);
}

/// Every curve the selector can resolve to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurveType {
    #[default]
    Linear,
    LinearClosed,
    Basis,
    BasisOpen,
    BasisClosed,
    Bundle,
    Cardinal,
    CardinalOpen,
    CardinalClosed,
    MonotoneX,
    MonotoneY,
    CatmullRom,
    CatmullRomOpen,
    CatmullRomClosed,
    Natural,
    Step,
    StepBefore,
    StepAfter,
}

impl CurveType {
    pub const ALL: [CurveType; 18] = [
        CurveType::Linear,
        CurveType::LinearClosed,
        CurveType::Basis,
        CurveType::BasisOpen,
        CurveType::BasisClosed,
        CurveType::Bundle,
        CurveType::Cardinal,
        CurveType::CardinalOpen,
        CurveType::CardinalClosed,
        CurveType::MonotoneX,
        CurveType::MonotoneY,
        CurveType::CatmullRom,
        CurveType::CatmullRomOpen,
        CurveType::CatmullRomClosed,
        CurveType::Natural,
        CurveType::Step,
        CurveType::StepBefore,
        CurveType::StepAfter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CurveType::Linear => "linear",
            CurveType::LinearClosed => "linear-closed",
            CurveType::Basis => "basis",
            CurveType::BasisOpen => "basis-open",
            CurveType::BasisClosed => "basis-closed",
            CurveType::Bundle => "bundle",
            CurveType::Cardinal => "cardinal",
            CurveType::CardinalOpen => "cardinal-open",
            CurveType::CardinalClosed => "cardinal-closed",
            CurveType::MonotoneX => "monotone-x",
            CurveType::MonotoneY => "monotone-y",
            CurveType::CatmullRom => "catmull-rom",
            CurveType::CatmullRomOpen => "catmull-rom-open",
            CurveType::CatmullRomClosed => "catmull-rom-closed",
            CurveType::Natural => "natural",
            CurveType::Step => "step",
            CurveType::StepBefore => "step-before",
            CurveType::StepAfter => "step-after",
        }
    }

    /// Whether this curve may be configured as a spline interpolation (every curve but the steps).
    pub const fn is_interpolation(self) -> bool {
        !matches!(self, CurveType::Step | CurveType::StepBefore | CurveType::StepAfter)
    }

    /// Instantiate the generator for this curve, writing into `sink`.
    pub fn build<'s>(self, sink: &'s mut dyn PathSink) -> Box<dyn LineCurve + 's> {
        match self {
            CurveType::Linear => Box::new(Linear::new(sink)),
            CurveType::LinearClosed => Box::new(LinearClosed::new(sink)),
            CurveType::Basis => Box::new(Basis::new(sink)),
            CurveType::BasisOpen => Box::new(BasisOpen::new(sink)),
            CurveType::BasisClosed => Box::new(BasisClosed::new(sink)),
            CurveType::Bundle => Box::new(Bundle::new(sink, BUNDLE_BETA)),
            CurveType::Cardinal => Box::new(Cardinal::new(sink, CARDINAL_TENSION)),
            CurveType::CardinalOpen => Box::new(CardinalOpen::new(sink, CARDINAL_TENSION)),
            CurveType::CardinalClosed => Box::new(CardinalClosed::new(sink, CARDINAL_TENSION)),
            CurveType::MonotoneX => Box::new(MonotoneX::new(sink)),
            CurveType::MonotoneY => Box::new(MonotoneY::new(sink)),
            CurveType::CatmullRom => Box::new(CatmullRom::new(sink, CATMULL_ROM_ALPHA)),
            CurveType::CatmullRomOpen => Box::new(CatmullRomOpen::new(sink, CATMULL_ROM_ALPHA)),
            CurveType::CatmullRomClosed => Box::new(CatmullRomClosed::new(sink, CATMULL_ROM_ALPHA)),
            CurveType::Natural => Box::new(Natural::new(sink)),
            CurveType::Step => Box::new(Step::middle(sink)),
            CurveType::StepBefore => Box::new(Step::before(sink)),
            CurveType::StepAfter => Box::new(Step::after(sink)),
        }
    }

    /// Run this curve over `points` and return the recorded path.
    pub fn path<I>(self, points: I) -> PathBuilder
    where
        I: IntoIterator<Item = Option<(f64, f64)>>,
    {
        let mut out = PathBuilder::new();
        draw_line(self, points, &mut out);
        out
    }
}

impl From<StepType> for CurveType {
    fn from(step: StepType) -> Self {
        match step {
            StepType::Step => CurveType::Step,
            StepType::StepBefore => CurveType::StepBefore,
            StepType::StepAfter => CurveType::StepAfter,
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_curve(s).ok_or_else(|| ShapeError::UnknownCurve(s.to_string()))
    }
}

/// Resolve a curve name to its generator. Unknown names resolve to nothing;
/// callers draw straight segments in that case.
pub fn lookup_curve(name: &str) -> Option<CurveType> {
    CurveType::ALL.iter().copied().find(|c| c.name() == name)
}

/// Whether `name` is one of the fifteen curves accepted as a spline interpolation.
pub fn is_interpolation_type(name: &str) -> bool {
    lookup_curve(name).is_some_and(CurveType::is_interpolation)
}

/// Curve for `d`'s series: the configured spline interpolation (cardinal when unrecognized)
/// for spline series, the configured step type for step series, else linear.
pub fn resolve_interpolation(classifier: &Classifier, config: &ShapeConfig, d: &Datum) -> CurveType {
    if classifier.is_spline_type(d) {
        let name = config.spline_interpolation_type.as_str();
        match lookup_curve(name).filter(|c| c.is_interpolation()) {
            Some(curve) => curve,
            None => {
                tracing::debug!(series = %d.id, name, "unrecognized spline interpolation, using cardinal");
                CurveType::Cardinal
            }
        }
    } else if classifier.is_step_type(d) {
        config.line_step_type.into()
    } else {
        CurveType::Linear
    }
}

/// Feed `points` through `curve` into `sink`. `None` or NaN points split the line into
/// separate segments, each opened with `line_start` and closed with `line_end`.
pub fn draw_line<I>(curve: CurveType, points: I, sink: &mut dyn PathSink)
where
    I: IntoIterator<Item = Option<(f64, f64)>>,
{
    let mut generator = curve.build(sink);
    let mut in_segment = false;

    for p in points {
        match p.filter(|(x, y)| !x.is_nan() && !y.is_nan()) {
            Some((x, y)) => {
                if !in_segment {
                    generator.line_start();
                    in_segment = true;
                }
                generator.point(x, y);
            }
            None if in_segment => {
                generator.line_end();
                in_segment = false;
            }
            None => {}
        }
    }

    if in_segment {
        generator.line_end();
    }
}
