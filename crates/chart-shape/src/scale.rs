// File: crates/chart-shape/src/scale.rs
// Summary: Scale abstraction consumed by the geometry engine, plus linear/log10 scales and an axis resolver.

use crate::axis::{AxisId, ScaleKind};

/// Maps a data value to a pixel coordinate and exposes its domain.
pub trait Scale {
    fn apply(&self, v: f64) -> f64;
    fn domain(&self) -> (f64, f64);
}

/// Resolves the scale for the x axis and for each y axis, main or sub (context) chart.
pub trait ScaleResolver {
    /// The x scale in effect; the zoomed scale wins over the main one when present.
    fn x(&self, sub: bool) -> &dyn Scale;
    fn y(&self, axis: AxisId, sub: bool) -> &dyn Scale;
}

/// Continuous scale mapping `[d0, d1]` onto `[r0, r1]`, linearly or in log10 space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousScale {
    pub kind: ScaleKind,
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
    // cached log endpoints when kind is Log10
    log_min: f64,
    log_max: f64,
}

impl ContinuousScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { kind: ScaleKind::Linear, d0, d1, r0: range.0, r1: range.1, log_min: 0.0, log_max: 0.0 }
    }

    pub fn new_log10(domain: (f64, f64), range: (f64, f64)) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        let d0 = if domain.0 <= eps { eps } else { domain.0 };
        let d1 = if domain.1 <= d0 { d0 * 10.0 } else { domain.1 };
        Self {
            kind: ScaleKind::Log10,
            d0,
            d1,
            r0: range.0,
            r1: range.1,
            log_min: d0.log10(),
            log_max: d1.log10(),
        }
    }

    pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64)) -> Self {
        match kind {
            ScaleKind::Linear => Self::new_linear(domain, range),
            ScaleKind::Log10 => Self::new_log10(domain, range),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let t = (px - self.r0) / (self.r1 - self.r0);
        match self.kind {
            ScaleKind::Linear => self.d0 + t * (self.d1 - self.d0),
            ScaleKind::Log10 => 10f64.powf(self.log_min + t * (self.log_max - self.log_min)),
        }
    }
}

impl Scale for ContinuousScale {
    #[inline]
    fn apply(&self, v: f64) -> f64 {
        let t = match self.kind {
            ScaleKind::Linear => (v - self.d0) / (self.d1 - self.d0),
            ScaleKind::Log10 => {
                let span = (self.log_max - self.log_min).max(1e-12);
                (v.max(1e-12).log10() - self.log_min) / span
            }
        };
        self.r0 + t * (self.r1 - self.r0)
    }

    fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }
}

/// Scale set for one chart: x (optionally zoomed), y and y2, each with an optional sub-chart variant.
#[derive(Clone, Debug)]
pub struct AxisScales {
    pub x: ContinuousScale,
    pub zoom: Option<ContinuousScale>,
    pub sub_x: Option<ContinuousScale>,
    pub y: ContinuousScale,
    pub y2: Option<ContinuousScale>,
    pub sub_y: Option<ContinuousScale>,
    pub sub_y2: Option<ContinuousScale>,
}

impl AxisScales {
    pub fn new(x: ContinuousScale, y: ContinuousScale) -> Self {
        Self { x, zoom: None, sub_x: None, y, y2: None, sub_y: None, sub_y2: None }
    }

    pub fn with_y2(mut self, y2: ContinuousScale) -> Self {
        self.y2 = Some(y2);
        self
    }

    pub fn with_zoom(mut self, zoom: ContinuousScale) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_sub_y2(mut self, sub_y2: ContinuousScale) -> Self {
        self.sub_y2 = Some(sub_y2);
        self
    }

    pub fn with_sub(mut self, sub_x: ContinuousScale, sub_y: ContinuousScale) -> Self {
        self.sub_x = Some(sub_x);
        self.sub_y = Some(sub_y);
        self
    }
}

impl ScaleResolver for AxisScales {
    fn x(&self, sub: bool) -> &dyn Scale {
        if sub {
            self.sub_x.as_ref().unwrap_or(&self.x)
        } else {
            self.zoom.as_ref().unwrap_or(&self.x)
        }
    }

    fn y(&self, axis: AxisId, sub: bool) -> &dyn Scale {
        // y2 falls back to y; a sub scale falls back to its own axis' main scale
        let main = match axis {
            AxisId::Y => &self.y,
            AxisId::Y2 => self.y2.as_ref().unwrap_or(&self.y),
        };
        if !sub {
            return main;
        }
        let sub_scale = match axis {
            AxisId::Y => self.sub_y.as_ref(),
            AxisId::Y2 => self.sub_y2.as_ref(),
        };
        sub_scale.unwrap_or(main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_and_inverts() {
        let s = ContinuousScale::new_linear((0.0, 100.0), (400.0, 0.0));
        assert_eq!(s.apply(0.0), 400.0);
        assert_eq!(s.apply(50.0), 200.0);
        assert!((s.invert(100.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_linear_domain_is_widened() {
        let s = ContinuousScale::new_linear((5.0, 5.0), (0.0, 10.0));
        assert_eq!(s.domain(), (5.0, 6.0));
    }

    #[test]
    fn log10_maps_decades_evenly() {
        let s = ContinuousScale::new_log10((1.0, 100.0), (0.0, 200.0));
        assert!((s.apply(10.0) - 100.0).abs() < 1e-9);
        assert!((s.invert(200.0) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn resolver_falls_back_to_main_scales() {
        let x = ContinuousScale::new_linear((0.0, 10.0), (0.0, 100.0));
        let y = ContinuousScale::new_linear((0.0, 10.0), (100.0, 0.0));
        let scales = AxisScales::new(x, y);
        assert_eq!(scales.y(AxisId::Y2, true).apply(10.0), 0.0);
        assert_eq!(scales.x(true).apply(5.0), 50.0);
    }

    #[test]
    fn sub_y2_stays_on_its_own_axis() {
        let x = ContinuousScale::new_linear((0.0, 10.0), (0.0, 100.0));
        let y = ContinuousScale::new_linear((0.0, 100.0), (100.0, 0.0));
        let y2 = ContinuousScale::new_linear((5.0, 20.0), (100.0, 0.0));
        let sub_y = ContinuousScale::new_linear((0.0, 1000.0), (10.0, 0.0));
        let scales = AxisScales::new(x, y).with_y2(y2).with_sub(x, sub_y);

        assert_eq!(scales.y(AxisId::Y2, true).domain(), (5.0, 20.0));
        assert_eq!(scales.y(AxisId::Y, true).domain(), (0.0, 1000.0));

        let scales = scales.with_sub_y2(ContinuousScale::new_linear((5.0, 20.0), (10.0, 0.0)));
        assert_eq!(scales.y(AxisId::Y2, true).apply(20.0), 0.0);
    }
}
