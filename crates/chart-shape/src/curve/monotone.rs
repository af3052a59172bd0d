// File: crates/chart-shape/src/curve/monotone.rs
// Summary: Monotone cubic interpolation (Steffen tangents) along x, and along y by reflection.

use super::path::Reflect;
use super::{LineCurve, PathSink};

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Zero-width intervals divide by a signed zero so the slope keeps the neighbour's direction.
fn nonzero_or_signed_zero(h: f64, other: f64) -> f64 {
    if h != 0.0 && !h.is_nan() {
        h
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}

pub struct MonotoneX<K> {
    sink: K,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
    point: u8,
}

impl<K: PathSink> MonotoneX<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, x0: f64::NAN, y0: f64::NAN, x1: f64::NAN, y1: f64::NAN, t0: f64::NAN, point: 0 }
    }

    /// Tangent at (x1, y1) from the secants on either side.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let s0 = (self.y1 - self.y0) / nonzero_or_signed_zero(h0, h1);
        let s1 = (y2 - self.y1) / nonzero_or_signed_zero(h1, h0);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        if s0.is_nan() || s1.is_nan() || p.is_nan() {
            return 0.0;
        }
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if t.is_nan() { 0.0 } else { t }
    }

    /// One-sided tangent at an end point, given the tangent `t` at the other end.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 && !h.is_nan() {
            (3.0 * (self.y1 - self.y0) / h - t) / 2.0
        } else {
            t
        }
    }

    fn hermite(&mut self, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.sink.bezier_curve_to(
            self.x0 + dx,
            self.y0 + dx * t0,
            self.x1 - dx,
            self.y1 - dx * t1,
            self.x1,
            self.y1,
        );
    }
}

impl<K: PathSink> LineCurve for MonotoneX<K> {
    fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.t0 = f64::NAN;
        self.point = 0;
    }

    fn line_end(&mut self) {
        match self.point {
            2 => self.sink.line_to(self.x1, self.y1),
            3 => {
                let t0 = self.t0;
                let t1 = self.slope2(t0);
                self.hermite(t0, t1);
            }
            _ => {}
        }
        if self.point == 1 {
            self.sink.close_path();
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        // coincident points would produce a zero-length segment
        if x == self.x1 && y == self.y1 {
            return;
        }

        let mut t1 = f64::NAN;
        match self.point {
            0 => {
                self.point = 1;
                self.sink.move_to(x, y);
            }
            1 => self.point = 2,
            2 => {
                self.point = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.hermite(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.hermite(self.t0, t1);
            }
        }

        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }
}

/// Monotone in y: runs the x-monotone curve on swapped coordinates and swaps them back on output.
pub struct MonotoneY<K: PathSink> {
    inner: MonotoneX<Reflect<K>>,
}

impl<K: PathSink> MonotoneY<K> {
    pub fn new(sink: K) -> Self {
        Self { inner: MonotoneX::new(Reflect(sink)) }
    }
}

impl<K: PathSink> LineCurve for MonotoneY<K> {
    fn line_start(&mut self) {
        self.inner.line_start();
    }

    fn line_end(&mut self) {
        self.inner.line_end();
    }

    fn point(&mut self, x: f64, y: f64) {
        self.inner.point(y, x);
    }
}
