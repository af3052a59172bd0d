// File: crates/chart-shape/src/curve/cardinal.rs
// Summary: Cardinal splines (clamped, closed, open) with adjustable tension.

use super::{LineCurve, PathSink};

/// Three trailing points plus the tangent scale `k = (1 - tension) / 6`.
#[derive(Clone, Copy)]
struct Window {
    k: f64,
    x0: f64,
    x1: f64,
    x2: f64,
    y0: f64,
    y1: f64,
    y2: f64,
}

impl Window {
    fn new(tension: f64) -> Self {
        Self { k: (1.0 - tension) / 6.0, x0: f64::NAN, x1: f64::NAN, x2: f64::NAN, y0: f64::NAN, y1: f64::NAN, y2: f64::NAN }
    }

    fn reset(&mut self) {
        *self = Self { k: self.k, ..Self::new(0.0) };
    }

    fn bezier(&self, sink: &mut impl PathSink, x: f64, y: f64) {
        let Self { k, x0, x1, x2, y0, y1, y2 } = *self;
        sink.bezier_curve_to(
            x1 + k * (x2 - x0),
            y1 + k * (y2 - y0),
            x2 + k * (x1 - x),
            y2 + k * (y1 - y),
            x2,
            y2,
        );
    }

    fn shift(&mut self, x: f64, y: f64) {
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }
}

pub struct Cardinal<K> {
    sink: K,
    w: Window,
    point: u8,
}

impl<K: PathSink> Cardinal<K> {
    pub fn new(sink: K, tension: f64) -> Self {
        Self { sink, w: Window::new(tension), point: 0 }
    }
}

impl<K: PathSink> LineCurve for Cardinal<K> {
    fn line_start(&mut self) {
        self.w.reset();
        self.point = 0;
    }

    fn line_end(&mut self) {
        match self.point {
            2 => self.sink.line_to(self.w.x2, self.w.y2),
            3 => self.w.bezier(&mut self.sink, self.w.x1, self.w.y1),
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
            1 => {
                self.point = 2;
                self.w.x1 = x;
                self.w.y1 = y;
            }
            2 => {
                self.point = 3;
                self.w.bezier(&mut self.sink, x, y);
            }
            _ => self.w.bezier(&mut self.sink, x, y),
        }
        self.w.shift(x, y);
    }
}

pub struct CardinalClosed<K> {
    sink: K,
    w: Window,
    head: [(f64, f64); 3],
    point: u8,
}

impl<K: PathSink> CardinalClosed<K> {
    pub fn new(sink: K, tension: f64) -> Self {
        Self { sink, w: Window::new(tension), head: [(f64::NAN, f64::NAN); 3], point: 0 }
    }
}

impl<K: PathSink> LineCurve for CardinalClosed<K> {
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

pub struct CardinalOpen<K> {
    sink: K,
    w: Window,
    point: u8,
}

impl<K: PathSink> CardinalOpen<K> {
    pub fn new(sink: K, tension: f64) -> Self {
        Self { sink, w: Window::new(tension), point: 0 }
    }
}

impl<K: PathSink> LineCurve for CardinalOpen<K> {
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
