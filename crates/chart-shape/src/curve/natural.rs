// File: crates/chart-shape/src/curve/natural.rs
// Summary: Natural cubic spline through every point (zero second derivative at both ends).

use super::{LineCurve, PathSink};

pub struct Natural<K> {
    sink: K,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl<K: PathSink> Natural<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, xs: Vec::new(), ys: Vec::new() }
    }
}

impl<K: PathSink> LineCurve for Natural<K> {
    fn line_start(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }

    fn line_end(&mut self) {
        let n = self.xs.len();
        if n > 0 {
            self.sink.move_to(self.xs[0], self.ys[0]);
            if n == 2 {
                self.sink.line_to(self.xs[1], self.ys[1]);
            } else if n > 2 {
                let (ax, bx) = control_points(&self.xs);
                let (ay, by) = control_points(&self.ys);
                for i in 0..n - 1 {
                    self.sink.bezier_curve_to(ax[i], ay[i], bx[i], by[i], self.xs[i + 1], self.ys[i + 1]);
                }
            }
        }
        if n == 1 {
            self.sink.close_path();
        }
        self.xs.clear();
        self.ys.clear();
    }

    fn point(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
}

/// First and second Bézier control points per segment, for one coordinate.
///
/// Solves the tridiagonal system with the Thomas algorithm. Needs at least three values.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }

    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }

    (a, b)
}
