// File: crates/chart-shape/src/curve/step.rs
// Summary: Piecewise-constant curves; `t` places the vertical riser between two points.

use super::{LineCurve, PathSink};

/// `t = 0.5` steps midway, `0` before the next point, `1` after the previous one.
pub struct Step<K> {
    sink: K,
    t: f64,
    x: f64,
    y: f64,
    point: u8,
}

impl<K: PathSink> Step<K> {
    pub fn new(sink: K, t: f64) -> Self {
        Self { sink, t, x: f64::NAN, y: f64::NAN, point: 0 }
    }

    pub fn middle(sink: K) -> Self {
        Self::new(sink, 0.5)
    }

    pub fn before(sink: K) -> Self {
        Self::new(sink, 0.0)
    }

    pub fn after(sink: K) -> Self {
        Self::new(sink, 1.0)
    }
}

impl<K: PathSink> LineCurve for Step<K> {
    fn line_start(&mut self) {
        self.x = f64::NAN;
        self.y = f64::NAN;
        self.point = 0;
    }

    fn line_end(&mut self) {
        if 0.0 < self.t && self.t < 1.0 && self.point == 2 {
            self.sink.line_to(self.x, self.y);
        }
        if self.point == 1 {
            self.sink.close_path();
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if self.point == 0 {
            self.point = 1;
            self.sink.move_to(x, y);
        } else {
            self.point = 2;
            if self.t <= 0.0 {
                self.sink.line_to(self.x, y);
                self.sink.line_to(x, y);
            } else {
                let x1 = self.x * (1.0 - self.t) + x * self.t;
                self.sink.line_to(x1, self.y);
                self.sink.line_to(x1, y);
            }
        }
        self.x = x;
        self.y = y;
    }
}
