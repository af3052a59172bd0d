// File: crates/chart-shape/src/curve/catmull_rom.rs
// Summary: Centripetal Catmull-Rom splines (clamped, closed, open), parameterised by alpha.
// Notes:
// - Chord lengths are raised to `alpha`; 0.5 gives the centripetal form that never
//   self-intersects within a segment. Below EPSILON a chord is treated as degenerate and
//   the control point falls back to the plain cardinal one.

use super::{LineCurve, PathSink};

const EPSILON: f64 = 1e-12;

#[derive(Clone, Copy)]
struct Window {
    alpha: f64,
    x0: f64,
    x1: f64,
    x2: f64,
    y0: f64,
    y1: f64,
    y2: f64,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl Window {
    fn new(alpha: f64) -> Self {
        Self {
            alpha,
            x0: f64::NAN,
            x1: f64::NAN,
            x2: f64::NAN,
            y0: f64::NAN,
            y1: f64::NAN,
            y2: f64::NAN,
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.alpha);
    }

    /// Chord length to the incoming point; only meaningful once a previous point exists.
    fn measure(&mut self, x: f64, y: f64) {
        let x23 = self.x2 - x;
        let y23 = self.y2 - y;
        self.l23_2a = (x23 * x23 + y23 * y23).powf(self.alpha);
        self.l23_a = self.l23_2a.sqrt();
    }

    fn bezier(&self, sink: &mut impl PathSink, x: f64, y: f64) {
        let (mut x1, mut y1, mut x2, mut y2) = (self.x1, self.y1, self.x2, self.y2);

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            x1 = (x1 * a - self.x0 * self.l12_2a + self.x2 * self.l01_2a) / n;
            y1 = (y1 * a - self.y0 * self.l12_2a + self.y2 * self.l01_2a) / n;
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            x2 = (x2 * b + self.x1 * self.l23_2a - x * self.l12_2a) / m;
            y2 = (y2 * b + self.y1 * self.l23_2a - y * self.l12_2a) / m;
        }

        sink.bezier_curve_to(x1, y1, x2, y2, self.x2, self.y2);
    }

    fn shift(&mut self, x: f64, y: f64) {
        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }
}

pub struct CatmullRom<K> {
    sink: K,
    w: Window,
    point: u8,
}

impl<K: PathSink> CatmullRom<K> {
    pub fn new(sink: K, alpha: f64) -> Self {
        Self { sink, w: Window::new(alpha), point: 0 }
    }
}

impl<K: PathSink> LineCurve for CatmullRom<K> {
    fn line_start(&mut self) {
        self.w.reset();
        self.point = 0;
    }

    fn line_end(&mut self) {
        match self.point {
            2 => self.sink.line_to(self.w.x2, self.w.y2),
            3 => {
                let (x2, y2) = (self.w.x2, self.w.y2);
                self.point(x2, y2);
            }
            _ => {}
        }
        if self.point == 1 {
            self.sink.close_path();
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if self.point > 0 {
            self.w.measure(x, y);
        }
        match self.point {
            0 => {
                self.point = 1;
                self.sink.move_to(x, y);
            }
            1 => self.point = 2,
            2 => {
                self.point = 3;
                self.w.bezier(&mut self.sink, x, y);
            }
            _ => self.w.bezier(&mut self.sink, x, y),
        }
        self.w.shift(x, y);
    }
}

pub struct CatmullRomClosed<K> {
    sink: K,
    w: Window,
    head: [(f64, f64); 3],
    point: u8,
}

impl<K: PathSink> CatmullRomClosed<K> {
    pub fn new(sink: K, alpha: f64) -> Self {
        Self { sink, w: Window::new(alpha), head: [(f64::NAN, f64::NAN); 3], point: 0 }
    }
}

impl<K: PathSink> LineCurve for CatmullRomClosed<K> {
    fn line_start(&mut self) {
        self.w.reset();
        self.head = [(f64::NAN, f64::NAN); 3];
        self.point = 0;
    }

    fn line_end(&mut self) {
        let [(x3, y3), (x4, y4), (x5, y5)] = self.head;
        match self.point {
            1 => {
                self.sink.move_to(x3, y3);
                self.sink.close_path();
            }
            2 => {
                self.sink.line_to(x3, y3);
                self.sink.close_path();
            }
            3 => {
                self.point(x3, y3);
                self.point(x4, y4);
                self.point(x5, y5);
            }
            _ => {}
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if self.point > 0 {
            self.w.measure(x, y);
        }
        match self.point {
            0 => {
                self.point = 1;
                self.head[0] = (x, y);
            }
            1 => {
                self.point = 2;
                self.head[1] = (x, y);
                self.sink.move_to(x, y);
            }
            2 => {
                self.point = 3;
                self.head[2] = (x, y);
            }
            _ => self.w.bezier(&mut self.sink, x, y),
        }
        self.w.shift(x, y);
    }
}

pub struct CatmullRomOpen<K> {
    sink: K,
    w: Window,
    point: u8,
}

impl<K: PathSink> CatmullRomOpen<K> {
    pub fn new(sink: K, alpha: f64) -> Self {
        Self { sink, w: Window::new(alpha), point: 0 }
    }
}

impl<K: PathSink> LineCurve for CatmullRomOpen<K> {
    fn line_start(&mut self) {
        self.w.reset();
        self.point = 0;
    }

    fn line_end(&mut self) {
        if self.point == 3 {
            self.sink.close_path();
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if self.point > 0 {
            self.w.measure(x, y);
        }
        match self.point {
            0 => self.point = 1,
            1 => self.point = 2,
            2 => {
                self.point = 3;
                self.sink.move_to(self.w.x2, self.w.y2);
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
