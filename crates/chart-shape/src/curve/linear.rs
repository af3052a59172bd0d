// File: crates/chart-shape/src/curve/linear.rs
// Summary: Straight-segment curves, open and closed.

use super::{LineCurve, PathSink};

pub struct Linear<K> {
    sink: K,
    point: u8,
}

impl<K: PathSink> Linear<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, point: 0 }
    }
}

impl<K: PathSink> LineCurve for Linear<K> {
    fn line_start(&mut self) {
        self.point = 0;
    }

    fn line_end(&mut self) {
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
            self.sink.line_to(x, y);
        }
    }
}

pub struct LinearClosed<K> {
    sink: K,
    started: bool,
}

impl<K: PathSink> LinearClosed<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, started: false }
    }
}

impl<K: PathSink> LineCurve for LinearClosed<K> {
    fn line_start(&mut self) {
        self.started = false;
    }

    fn line_end(&mut self) {
        if self.started {
            self.sink.close_path();
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if self.started {
            self.sink.line_to(x, y);
        } else {
            self.started = true;
            self.sink.move_to(x, y);
        }
    }
}
