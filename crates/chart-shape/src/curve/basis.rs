// File: crates/chart-shape/src/curve/basis.rs
// Summary: Cubic B-spline curves (clamped, closed, open) and the straightening bundle variant.

use super::{LineCurve, PathSink};

/// Control-point window shared by the B-spline variants.
#[derive(Clone, Copy)]
struct Window {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl Window {
    const EMPTY: Self = Self { x0: f64::NAN, x1: f64::NAN, y0: f64::NAN, y1: f64::NAN };

    fn bezier(&self, sink: &mut impl PathSink, x: f64, y: f64) {
        let Self { x0, x1, y0, y1 } = *self;
        sink.bezier_curve_to(
            (2.0 * x0 + x1) / 3.0,
            (2.0 * y0 + y1) / 3.0,
            (x0 + 2.0 * x1) / 3.0,
            (y0 + 2.0 * y1) / 3.0,
            (x0 + 4.0 * x1 + x) / 6.0,
            (y0 + 4.0 * y1 + y) / 6.0,
        );
    }

    fn shift(&mut self, x: f64, y: f64) {
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }
}

pub struct Basis<K> {
    sink: K,
    w: Window,
    point: u8,
}

impl<K: PathSink> Basis<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, w: Window::EMPTY, point: 0 }
    }
}

impl<K: PathSink> LineCurve for Basis<K> {
    fn line_start(&mut self) {
        self.w = Window::EMPTY;
        self.point = 0;
    }

    fn line_end(&mut self) {
        let (x1, y1) = (self.w.x1, self.w.y1);
        match self.point {
            3 => {
                self.w.bezier(&mut self.sink, x1, y1);
                self.sink.line_to(x1, y1);
            }
            2 => self.sink.line_to(x1, y1),
            _ => {}
        }
        if self.point == 1 {
            self.sink.close_path();
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        match self.point {
            0 => {
                self.point = 1;
                self.sink.move_to(x, y);
            }
            1 => self.point = 2,
            2 => {
                self.point = 3;
                let w = self.w;
                self.sink.line_to((5.0 * w.x0 + w.x1) / 6.0, (5.0 * w.y0 + w.y1) / 6.0);
                w.bezier(&mut self.sink, x, y);
            }
            _ => self.w.bezier(&mut self.sink, x, y),
        }
        self.w.shift(x, y);
    }
}

pub struct BasisClosed<K> {
    sink: K,
    w: Window,
    // the first three points, replayed on close
    head: [(f64, f64); 3],
    point: u8,
}

impl<K: PathSink> BasisClosed<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, w: Window::EMPTY, head: [(f64::NAN, f64::NAN); 3], point: 0 }
    }
}

impl<K: PathSink> LineCurve for BasisClosed<K> {
    fn line_start(&mut self) {
        self.w = Window::EMPTY;
        self.head = [(f64::NAN, f64::NAN); 3];
        self.point = 0;
    }

    fn line_end(&mut self) {
        let [(x2, y2), (x3, y3), (x4, y4)] = self.head;
        match self.point {
            1 => {
                self.sink.move_to(x2, y2);
                self.sink.close_path();
            }
            2 => {
                self.sink.move_to((x2 + 2.0 * x3) / 3.0, (y2 + 2.0 * y3) / 3.0);
                self.sink.line_to((x3 + 2.0 * x2) / 3.0, (y3 + 2.0 * y2) / 3.0);
                self.sink.close_path();
            }
            3 => {
                self.point(x2, y2);
                self.point(x3, y3);
                self.point(x4, y4);
            }
            _ => {}
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        match self.point {
            0 => {
                self.point = 1;
                self.head[0] = (x, y);
            }
            1 => {
                self.point = 2;
                self.head[1] = (x, y);
            }
            2 => {
                self.point = 3;
                self.head[2] = (x, y);
                let w = self.w;
                self.sink.move_to((w.x0 + 4.0 * w.x1 + x) / 6.0, (w.y0 + 4.0 * w.y1 + y) / 6.0);
            }
            _ => self.w.bezier(&mut self.sink, x, y),
        }
        self.w.shift(x, y);
    }
}

pub struct BasisOpen<K> {
    sink: K,
    w: Window,
    point: u8,
}

impl<K: PathSink> BasisOpen<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, w: Window::EMPTY, point: 0 }
    }
}

impl<K: PathSink> LineCurve for BasisOpen<K> {
    fn line_start(&mut self) {
        self.w = Window::EMPTY;
        self.point = 0;
    }

    fn line_end(&mut self) {
        if self.point == 3 {
            self.sink.close_path();
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        match self.point {
            0 => self.point = 1,
            1 => self.point = 2,
            2 => {
                self.point = 3;
                let w = self.w;
                self.sink.move_to((w.x0 + 4.0 * w.x1 + x) / 6.0, (w.y0 + 4.0 * w.y1 + y) / 6.0);
            }
            3 => {
                self.point = 4;
                self.w.bezier(&mut self.sink, x, y);
            }
            _ => self.w.bezier(&mut self.sink, x, y),
        }
        self.w.shift(x, y);
    }
}

/// B-spline pulled towards the straight line between its end points by `1 - beta`.
pub struct Bundle<K> {
    basis: Basis<K>,
    beta: f64,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl<K: PathSink> Bundle<K> {
    pub const DEFAULT_BETA: f64 = 0.85;

    pub fn new(sink: K, beta: f64) -> Self {
        Self { basis: Basis::new(sink), beta, xs: Vec::new(), ys: Vec::new() }
    }
}

impl<K: PathSink> LineCurve for Bundle<K> {
    fn line_start(&mut self) {
        self.xs.clear();
        self.ys.clear();
        self.basis.line_start();
    }

    fn line_end(&mut self) {
        let n = self.xs.len();
        if n > 1 {
            let j = (n - 1) as f64;
            let (x0, y0) = (self.xs[0], self.ys[0]);
            let dx = self.xs[n - 1] - x0;
            let dy = self.ys[n - 1] - y0;
            let beta = self.beta;

            for i in 0..n {
                let t = i as f64 / j;
                self.basis.point(
                    beta * self.xs[i] + (1.0 - beta) * (x0 + t * dx),
                    beta * self.ys[i] + (1.0 - beta) * (y0 + t * dy),
                );
            }
        }
        self.xs.clear();
        self.ys.clear();
        self.basis.line_end();
    }

    fn point(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
}
